//! Helpers shared by controllers: CSRF validation for the login flow, the editor guard
//! applied to every mutation, JSON body and path id parsing.

pub mod csrf;
pub mod editor;
pub mod json;
pub mod path;
