mod helpers;
mod login;
mod resilience;
