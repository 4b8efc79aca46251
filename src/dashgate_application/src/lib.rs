pub mod use_cases;

pub use use_cases::{
    authenticate::{AuthError, AuthenticateUseCase},
    register::{RegisterUseCase, RegistrationError},
};

#[cfg(test)]
mod test_support;
