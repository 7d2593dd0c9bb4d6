pub mod identity;
pub mod insert;
pub mod mutate;
pub mod run;
