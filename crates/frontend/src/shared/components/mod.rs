pub mod debounced_input;
