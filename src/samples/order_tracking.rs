//! Order tracking signals.

use crate::error::Result;
use crate::models::common::{CivilDateTime, Price};
use crate::models::order_tracking::{
    LineItemDetails, OrderTrackingSignal, ShipmentLineItemMapping, ShippingInfo,
};
use crate::services::order_tracking;

use super::{Registry, SampleContext, print_json};

const ZONE: &str = "America/Los_Angeles";

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(
        registry,
        "ordertracking.v1.create_order_tracking_signal",
        "Report a two-shipment order (-p product_ids=first;second)",
        create_order_tracking_signal
    );
    Ok(())
}

/// An order of two products, split over two shipments: one delivered by
/// UPS, one shipped by USPS.
fn sample_signal(first_product_id: &str, second_product_id: &str) -> OrderTrackingSignal {
    let delivered = ShippingInfo {
        shipment_id: "shipment_id1".to_string(),
        carrier: Some("UPS".to_string()),
        carrier_service: Some("Ground".to_string()),
        tracking_id: Some("1Z23456789".to_string()),
        shipped_time: Some(CivilDateTime::date(2025, 3, 25, ZONE).at(16, 22, None)),
        earliest_delivery_promise_time: Some(CivilDateTime::date(2025, 3, 27, ZONE)),
        latest_delivery_promise_time: Some(CivilDateTime::date(2025, 3, 30, ZONE)),
        actual_delivery_time: Some(CivilDateTime::date(2025, 3, 29, ZONE).at(16, 22, None)),
        shipping_status: Some("DELIVERED".to_string()),
        origin_postal_code: Some("94043".to_string()),
        origin_region_code: Some("US".to_string()),
    };
    let shipped = ShippingInfo {
        shipment_id: "shipment_id2".to_string(),
        carrier: Some("USPS".to_string()),
        carrier_service: Some("Ground Advantage".to_string()),
        tracking_id: Some("987654321".to_string()),
        shipped_time: Some(CivilDateTime::date(2025, 3, 26, ZONE).at(16, 22, None)),
        shipping_status: Some("SHIPPED".to_string()),
        origin_postal_code: Some("94043".to_string()),
        origin_region_code: Some("US".to_string()),
        ..Default::default()
    };

    let mapping = |shipment_id: &str, line_item_id: &str| ShipmentLineItemMapping {
        shipment_id: shipment_id.to_string(),
        line_item_id: line_item_id.to_string(),
        quantity: 1,
    };

    OrderTrackingSignal {
        order_id: "unique_order_id443455".to_string(),
        order_created_time: CivilDateTime::date(2025, 3, 24, ZONE).at(12, 2, Some(22)),
        shipping_info: vec![delivered, shipped],
        line_items: vec![
            LineItemDetails {
                line_item_id: "item1".to_string(),
                product_id: first_product_id.to_string(),
                quantity: 2,
                ..Default::default()
            },
            LineItemDetails {
                line_item_id: "item2".to_string(),
                product_id: second_product_id.to_string(),
                quantity: 1,
                mpn: Some("00638HAY".to_string()),
                product_title: Some("Tshirt-small-blue".to_string()),
                brand: Some("Brand1".to_string()),
                gtins: vec!["001234567890".to_string()],
            },
        ],
        shipment_line_item_mapping: vec![
            mapping("shipment_id1", "item2"),
            mapping("shipment_id2", "item1"),
            mapping("shipment_id1", "item1"),
        ],
        customer_shipping_fee: Some(Price::micros(5_000_000, "USD")),
        delivery_postal_code: Some("10011".to_string()),
        ..Default::default()
    }
}

async fn create_order_tracking_signal(ctx: &SampleContext) -> Result<()> {
    let product_ids = ctx.param_or("product_ids", "online~en~US~sku1;online~en~US~sku2");
    let (first, second) = product_ids.split_once(';').unwrap_or((product_ids, product_ids));
    let signal = sample_signal(first, second);

    println!("Sending Create OrderTrackingSignal request.");
    let created = order_tracking::create_order_tracking_signal(
        &ctx.client,
        ctx.account_id(),
        ctx.param("signal_id").ok(),
        &signal,
    )
    .await?;
    print_json("Created OrderTrackingSignal below.", &created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantities_and_dates_use_the_api_encoding() {
        let json = serde_json::to_value(sample_signal("p1", "p2")).unwrap();
        assert_eq!(json["lineItems"][0]["quantity"], "2");
        assert_eq!(json["lineItems"][1]["productId"], "p2");
        assert_eq!(json["orderCreatedTime"]["seconds"], 22);
        assert_eq!(json["orderCreatedTime"]["timeZone"]["id"], ZONE);
        assert!(json["shippingInfo"][0]["earliestDeliveryPromiseTime"].get("hours").is_none());
        assert_eq!(json["shipmentLineItemMapping"].as_array().unwrap().len(), 3);
        assert!(json.get("orderTrackingSignalId").is_none());
    }
}
