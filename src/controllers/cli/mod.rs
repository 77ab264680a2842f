pub mod animate_controller;
