pub mod commands;

/*
CLI Module Tests

Argument parsing for the server binary.
*/
