//! Clients for external services.
//!
//! Only one integration exists today: the hosted account service that stores
//! user profiles. It is consumed strictly through [`remote::Remote`]; no
//! timer or workout state is ever synchronized with it.

pub mod remote;
