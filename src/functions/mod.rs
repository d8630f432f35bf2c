//! The functions shipped with the runtime, one binary each.

mod echo;
mod echo_function;
mod helloworld;

pub use echo::echo;
pub use echo_function::echo_function;
pub use helloworld::helloworld;
