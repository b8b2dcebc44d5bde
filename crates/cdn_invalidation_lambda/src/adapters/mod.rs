pub mod invalidator;
