//! Persistence primitives for orders and items, plus the request-level
//! operations built on them. Primitives are generic over the connection so
//! they run the same inside and outside a transaction.

pub mod item_service;
pub mod order_service;
