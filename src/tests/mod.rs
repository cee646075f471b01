mod abi_tests;
