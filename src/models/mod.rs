pub mod country;
pub mod passport;
pub mod trip;
pub mod user;
pub mod visa;
