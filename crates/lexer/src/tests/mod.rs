// Test module for lexer
//
// Unit tests for the cursor routines and the two lexical modes.

mod number_tests;
