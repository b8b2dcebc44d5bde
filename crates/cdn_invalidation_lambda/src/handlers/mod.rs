pub mod invalidate;
