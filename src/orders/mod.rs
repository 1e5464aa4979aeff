mod mapper;
mod rounding;

pub use mapper::{
    modify_order_request_to_wire, order_request_to_wire, order_type_to_wire,
    order_wires_to_order_action,
};
pub use rounding::{float_to_wire, format_decimal, round_order_price, round_order_size};
