pub mod input_validator;
pub mod market_researcher;
pub mod product_strategist;
