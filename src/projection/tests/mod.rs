mod zones_tests;
