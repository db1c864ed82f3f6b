//! Route Configuration Module
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - Authentication and treatment endpoints
//!
//! Protected route groups carry `auth_middleware` as a route layer, so an
//! unauthenticated request never reaches their handlers.

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
