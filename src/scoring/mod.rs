pub mod batida;
