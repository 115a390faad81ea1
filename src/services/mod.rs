pub mod nutrition_rules;
pub mod preview;
pub mod safety;
pub mod substitutions;
pub mod training_rules;
