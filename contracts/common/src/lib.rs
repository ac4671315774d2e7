#![no_std]

pub mod ownership;
