pub mod expr_generators;
