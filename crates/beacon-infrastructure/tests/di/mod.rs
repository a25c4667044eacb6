mod composer_tests;
