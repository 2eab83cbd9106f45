pub mod coolprop;
