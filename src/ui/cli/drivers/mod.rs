pub mod inquire_driver;
pub mod prompt_driver;

pub use inquire_driver::InquireDriver;
pub use prompt_driver::PromptDriver;
