//! Order commands

/// 创建订单命令
///
/// 字段不做校验：空字符串和负数量都会原样保存。
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub customer_name: String,
    pub product: String,
    pub quantity: i32,
}

impl CreateOrderCommand {
    pub fn new(customer_name: impl Into<String>, product: impl Into<String>, quantity: i32) -> Self {
        Self {
            customer_name: customer_name.into(),
            product: product.into(),
            quantity,
        }
    }
}
