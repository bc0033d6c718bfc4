//! Terminal output helpers

mod printer;

pub use printer::{
    print_header, print_info, print_key_value, print_next_steps, print_success, print_warning,
};
