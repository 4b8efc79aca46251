pub mod authenticate;
pub mod register;
