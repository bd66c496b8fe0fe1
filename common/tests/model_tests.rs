use std::cmp::Ordering;

use common::decimal::{dec, parse_decimal, Price, Quantity};
use common::error::Error;
use common::model::order::{Order, OrderRequest, Side};
use common::model::summary::OrderSummary;
use proptest::prelude::*;
use uuid::Uuid;

fn create_test_order(user_id: &str, quantity: Quantity, price: Price, side: Side) -> Order {
    let request = OrderRequest::new(user_id, quantity, price, side).unwrap();
    Order::from_request(request, Uuid::new_v4())
}

#[test]
fn test_order_request_keeps_fields() {
    let request = OrderRequest::new("user1", dec!(1.5), dec!(10), Side::Sell).unwrap();

    assert_eq!(request.user_id, "user1");
    assert_eq!(request.quantity, dec!(1.5));
    assert_eq!(request.price, dec!(10));
    assert_eq!(request.side, Side::Sell);
}

#[test]
fn test_order_request_rejects_empty_owner() {
    let result = OrderRequest::new("  ", dec!(1), dec!(10), Side::Buy);
    assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[test]
fn test_order_request_rejects_non_positive_quantity() {
    assert!(matches!(
        OrderRequest::new("user1", dec!(0), dec!(10), Side::Buy),
        Err(Error::ValidationError(_))
    ));
    assert!(matches!(
        OrderRequest::new("user1", dec!(-1), dec!(10), Side::Buy),
        Err(Error::ValidationError(_))
    ));
}

#[test]
fn test_order_request_rejects_non_positive_price() {
    let result = OrderRequest::new("user1", dec!(1), dec!(0), Side::Sell);
    assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[test]
fn test_order_equality_includes_id() {
    let request = OrderRequest::new("user1", dec!(1), dec!(10), Side::Buy).unwrap();
    let id = Uuid::new_v4();

    let order = Order::from_request(request.clone(), id);
    let same = Order::from_request(request.clone(), id);
    let other = Order::from_request(request, Uuid::new_v4());

    assert_eq!(order, same);
    assert_ne!(order, other);
}

#[test]
fn test_side_parsing() {
    assert_eq!("buy".parse::<Side>().unwrap(), Side::Buy);
    assert_eq!("SELL".parse::<Side>().unwrap(), Side::Sell);
    assert!(matches!("hold".parse::<Side>(), Err(Error::ValidationError(_))));
    assert_eq!(Side::Buy.to_string(), "BUY");
}

#[test]
fn test_side_price_priority() {
    let low = dec!(1);
    let high = dec!(10);

    assert_eq!(Side::Buy.price_priority(&high, &low), Ordering::Less);
    assert_eq!(Side::Sell.price_priority(&low, &high), Ordering::Less);
    assert_eq!(Side::Buy.price_priority(&low, &low), Ordering::Equal);
}

#[test]
fn test_summary_of_orders() {
    let order1 = create_test_order("user1", dec!(1), dec!(1), Side::Sell);
    let order2 = create_test_order("user2", dec!(10), dec!(1), Side::Sell);

    let summary = OrderSummary::from_orders([&order1, &order2]).unwrap();

    assert_eq!(summary.side, Side::Sell);
    assert_eq!(summary.price, dec!(1));
    assert_eq!(summary.quantity, dec!(11));
}

#[test]
fn test_summary_of_single_order() {
    let order = create_test_order("user1", dec!(1), dec!(1), Side::Sell);

    let summary = OrderSummary::from_orders([&order]).unwrap();

    assert_eq!(summary, OrderSummary { quantity: dec!(1), price: dec!(1), side: Side::Sell });
}

#[test]
fn test_summary_of_empty_orders_fails() {
    let orders: Vec<Order> = Vec::new();
    let result = OrderSummary::from_orders(&orders);
    assert!(matches!(result, Err(Error::InvalidAggregationInput(_))));
}

#[test]
fn test_summary_of_mixed_sides_fails() {
    let order1 = create_test_order("user1", dec!(1), dec!(1), Side::Sell);
    let order2 = create_test_order("user2", dec!(10), dec!(1), Side::Buy);

    let result = OrderSummary::from_orders([&order1, &order2]);
    assert!(matches!(result, Err(Error::InvalidAggregationInput(_))));
}

#[test]
fn test_summary_of_mixed_prices_fails() {
    let order1 = create_test_order("user1", dec!(1), dec!(10), Side::Buy);
    let order2 = create_test_order("user2", dec!(10), dec!(1), Side::Buy);

    let result = OrderSummary::from_orders([&order1, &order2]);
    assert!(matches!(result, Err(Error::InvalidAggregationInput(_))));
}

#[test]
fn test_summary_addition_is_exact() {
    // 0.1 has no exact binary representation; ten of them must still total 1
    let orders: Vec<Order> = (0..10)
        .map(|i| create_test_order(&format!("user{}", i), dec!(0.1), dec!(10), Side::Buy))
        .collect();

    let summary = OrderSummary::from_orders(&orders).unwrap();
    assert_eq!(summary.quantity, dec!(1));
}

#[test]
fn test_summary_overflow_is_reported() {
    let order1 = create_test_order("user1", Quantity::MAX, dec!(10), Side::Buy);
    let order2 = create_test_order("user2", Quantity::MAX, dec!(10), Side::Buy);

    let result = OrderSummary::from_orders([&order1, &order2]);
    assert!(matches!(result, Err(Error::DecimalError(_))));
}

#[test]
fn test_parse_decimal() {
    assert_eq!(parse_decimal(" 0.25 ").unwrap(), dec!(0.25));
    assert!(matches!(parse_decimal("ten"), Err(Error::DecimalError(_))));
}

fn arb_quantity() -> impl Strategy<Value = Quantity> {
    (1i64..1_000_000i64, 0u32..6u32).prop_map(|(mantissa, scale)| Quantity::new(mantissa, scale))
}

proptest! {
    #[test]
    fn prop_summary_is_independent_of_input_order(quantities in prop::collection::vec(arb_quantity(), 1..40)) {
        let orders: Vec<Order> = quantities
            .iter()
            .map(|q| create_test_order("user1", *q, dec!(7.5), Side::Sell))
            .collect();

        let forward = OrderSummary::from_orders(&orders).unwrap();
        let backward = OrderSummary::from_orders(orders.iter().rev()).unwrap();
        let expected: Quantity = quantities.iter().sum();

        prop_assert_eq!(forward.quantity, expected);
        prop_assert_eq!(backward.quantity, expected);
    }
}
