// Models shared by the GUI, the CLI and the HTML renderer
use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

pub const PRODUCTS_ERROR: &str = "Error loading products";
pub const PRODUCTS_EMPTY: &str = "No products found";
pub const ORDERS_ERROR: &str = "Error loading orders";
pub const ORDERS_EMPTY: &str = "No orders yet";
pub const ORDER_PLACED: &str = "Order placed successfully! We will contact you soon.";
pub const ORDER_REJECTED: &str = "Error placing order. Please try again.";
pub const ORDER_NETWORK_ERROR: &str = "Network error. Please check your connection.";
pub const SEED_DONE: &str = "Sample products added successfully!";
pub const SEED_FAILED: &str = "Error adding sample products";
pub const DEADLINE_MISSING: &str = "Not specified";
pub const INVALID_DATE: &str = "Invalid Date";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Design,
    Software,
    Service,
    Animation,
    Other(String),
}

impl Category {
    pub const KNOWN: [Category; 4] = [
        Category::Design,
        Category::Software,
        Category::Service,
        Category::Animation,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Design => "design",
            Category::Software => "software",
            Category::Service => "service",
            Category::Animation => "animation",
            Category::Other(raw) => raw,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other(String::new())
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "design" => Category::Design,
            "software" => Category::Software,
            "service" => Category::Service,
            "animation" => Category::Animation,
            _ => Category::Other(raw),
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Category::from(raw.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which slice of the catalog is shown. `"all"` keeps every product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::from(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// Filter buttons in display order.
    pub fn choices() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::KNOWN.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => OrderStatus::Pending,
            "completed" => OrderStatus::Completed,
            _ => OrderStatus::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A price as the API sent it. MySQL-backed endpoints often stringify
/// numeric columns, so text is kept as well as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Price {
    Number(Number),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl From<Value> for Price {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => Price::Number(n),
            other => Price::Text(text_of(other)),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Price::from)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{n}"),
            Price::Text(text) => f.write_str(text),
        }
    }
}

/// A catalog row. Each field reads whatever JSON the server put there, so one
/// odd row never fails the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_from_text")]
    pub category: Category,
    pub price: Price,
}

impl Product {
    pub fn new(name: &str, description: &str, category: Category, price: u64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            category,
            price: Price::Number(Number::from(price)),
        }
    }

    /// `$150`, `$99.5`, `$800.00`: the price exactly as the API sent it.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// Raw form input. Nothing here is validated before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderForm {
    pub customer_name: String,
    pub customer_email: String,
    pub product_category: String,
    pub product_details: String,
    pub budget: String,
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    #[serde(deserialize_with = "lenient_text")]
    pub customer_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub customer_email: String,
    #[serde(deserialize_with = "lenient_from_text")]
    pub product_category: Category,
    #[serde(deserialize_with = "lenient_text")]
    pub product_details: String,
    #[serde(deserialize_with = "lenient_text")]
    pub budget: String,
    #[serde(deserialize_with = "lenient_optional_text")]
    pub deadline: Option<String>,
    #[serde(deserialize_with = "lenient_from_text")]
    pub status: OrderStatus,
    #[serde(deserialize_with = "lenient_text")]
    pub order_date: String,
}

impl Order {
    pub fn from_form(form: &OrderForm, now: DateTime<Utc>) -> Self {
        let deadline = Some(form.deadline.clone()).filter(|d| !d.trim().is_empty());
        Self {
            customer_name: form.customer_name.clone(),
            customer_email: form.customer_email.clone(),
            product_category: Category::from(form.product_category.as_str()),
            product_details: form.product_details.clone(),
            budget: form.budget.clone(),
            deadline,
            status: OrderStatus::Pending,
            order_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn deadline_label(&self) -> &str {
        match self.deadline.as_deref() {
            Some(deadline) if !deadline.is_empty() => deadline,
            _ => DEADLINE_MISSING,
        }
    }

    pub fn order_date_label(&self) -> String {
        date_label(&self.order_date)
    }
}

/// Renders a timestamp as a local calendar date (`1/15/2025`).
/// Accepts RFC 3339 and the `YYYY-MM-DD HH:MM:SS` form SQL backends emit.
pub fn date_label(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        });
    match parsed {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn text_of(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(text_of)
}

fn lenient_from_text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    lenient_text(deserializer).map(T::from)
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Value::deserialize(deserializer).map(|value| match value {
        Value::Null => None,
        other => Some(text_of(other)),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            total: orders.len(),
            pending: orders.iter().filter(|o| o.status == OrderStatus::Pending).count(),
            completed: orders.iter().filter(|o| o.status == OrderStatus::Completed).count(),
        }
    }
}

/// Decoded body of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPayload<T> {
    Items(Vec<T>),
    /// The server answered with an object carrying an `error` key.
    Rejected(String),
}

impl<T: DeserializeOwned> ListPayload<T> {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(_) => serde_json::from_value(value).map(ListPayload::Items),
            Value::Object(mut map) => match map.remove("error") {
                Some(reason) => Ok(ListPayload::Rejected(text_of(reason))),
                None => Err(serde_json::Error::custom("expected a JSON array")),
            },
            _ => Err(serde_json::Error::custom("expected a JSON array")),
        }
    }
}

/// Answer to a create-order call. `success` is read the way a browser
/// script tests it: `true`, non-zero numbers, non-empty strings, arrays and
/// objects accept; `false`, `0`, `""`, `null` or a missing key do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAck {
    pub accepted: bool,
}

impl OrderAck {
    pub fn from_value(value: &Value) -> Self {
        Self {
            accepted: value.get("success").is_some_and(is_truthy),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// What a list region shows after a load.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Failed,
    Empty,
    Loaded(Vec<T>),
}

impl<T> Listing<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Loaded(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::Loaded(items) => items,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// A fixed user-facing message shown in one of the message regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: &'static str,
}

impl Notice {
    pub const fn success(text: &'static str) -> Self {
        Self { level: NoticeLevel::Success, text }
    }

    pub const fn error(text: &'static str) -> Self {
        Self { level: NoticeLevel::Error, text }
    }

    pub const fn info(text: &'static str) -> Self {
        Self { level: NoticeLevel::Info, text }
    }

    /// CSS class of the message element on the page.
    pub fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "message success",
            NoticeLevel::Error => "message error",
            NoticeLevel::Info => "message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_with(status: &str) -> Order {
        Order {
            status: OrderStatus::from(status.to_string()),
            ..Order::default()
        }
    }

    #[test]
    fn category_keeps_unknown_values() {
        let c: Category = serde_json::from_value(json!("music")).unwrap();
        assert_eq!(c, Category::Other("music".into()));
        assert_eq!(serde_json::to_value(&c).unwrap(), json!("music"));
        assert_eq!(serde_json::to_value(Category::Design).unwrap(), json!("design"));
    }

    #[test]
    fn stats_count_by_status_equality() {
        let orders: Vec<Order> = ["pending", "completed", "pending", "shipped"]
            .into_iter()
            .map(order_with)
            .collect();
        let stats = OrderStats::from_orders(&orders);
        assert_eq!(stats, OrderStats { total: 4, pending: 2, completed: 1 });
    }

    #[test]
    fn error_object_is_rejected_whatever_its_content() {
        let payload = ListPayload::<Product>::from_value(json!({"error": "x"})).unwrap();
        assert_eq!(payload, ListPayload::Rejected("x".into()));
        let payload = ListPayload::<Product>::from_value(json!({"error": {"code": 3}})).unwrap();
        assert!(matches!(payload, ListPayload::Rejected(_)));
    }

    #[test]
    fn non_array_without_error_is_malformed() {
        assert!(ListPayload::<Product>::from_value(json!({"items": []})).is_err());
        assert!(ListPayload::<Product>::from_value(json!("nope")).is_err());
    }

    #[test]
    fn products_ignore_server_identity() {
        let payload = ListPayload::<Product>::from_value(json!([
            {"id": 7, "name": "Logo", "description": "d", "category": "design", "price": 150}
        ]))
        .unwrap();
        let ListPayload::Items(items) = payload else { panic!("expected items") };
        assert_eq!(items[0].name, "Logo");
        assert_eq!(items[0].price_label(), "$150");
    }

    #[test]
    fn price_label_keeps_fraction() {
        let product: Product =
            serde_json::from_value(json!({"name": "n", "category": "service", "price": 49.5})).unwrap();
        assert_eq!(product.price_label(), "$49.5");
    }

    #[test]
    fn order_ack_follows_script_truthiness() {
        for accepted in [json!(true), json!(1), json!("true"), json!("0"), json!({}), json!([])] {
            assert!(OrderAck::from_value(&json!({ "success": accepted })).accepted, "{accepted}");
        }
        for refused in [json!(false), json!(0), json!(0.0), json!(""), json!(null)] {
            assert!(!OrderAck::from_value(&json!({ "success": refused })).accepted, "{refused}");
        }
        assert!(!OrderAck::from_value(&json!({"ok": true})).accepted);
        assert!(!OrderAck::from_value(&json!([])).accepted);
    }

    #[test]
    fn stringified_price_keeps_the_row() {
        let payload = ListPayload::<Product>::from_value(json!([
            {"name": "Logo", "category": "design", "price": 150},
            {"name": "Site", "category": "software", "price": "800.00"}
        ]))
        .unwrap();
        let ListPayload::Items(items) = payload else { panic!("expected items") };
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].price, Price::Text("800.00".into()));
        assert_eq!(items[1].price_label(), "$800.00");
    }

    #[test]
    fn product_text_fields_accept_any_json() {
        let product: Product = serde_json::from_value(json!({
            "name": null,
            "description": 42,
            "category": null
        }))
        .unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.description, "42");
        assert_eq!(product.category, Category::Other(String::new()));
        assert_eq!(product.price_label(), "$");
    }

    #[test]
    fn null_order_fields_read_as_empty_text() {
        let payload = ListPayload::<Order>::from_value(json!([
            {"customerName": "Ada", "productDetails": null, "status": "pending"},
            {"customerName": null, "customerEmail": null, "productCategory": null,
             "status": null, "orderDate": null}
        ]))
        .unwrap();
        let ListPayload::Items(orders) = payload else { panic!("expected items") };
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].product_details, "");
        assert_eq!(orders[1].customer_name, "");
        assert_eq!(orders[1].product_category, Category::Other(String::new()));
        assert_eq!(orders[1].status, OrderStatus::Other(String::new()));
        assert_eq!(orders[1].order_date_label(), INVALID_DATE);
    }

    #[test]
    fn order_from_form_is_pending_and_camel_cased() {
        let form = OrderForm {
            customer_name: "Ada".into(),
            customer_email: "ada@example.com".into(),
            product_category: "software".into(),
            product_details: "A website".into(),
            budget: "about 500".into(),
            deadline: "  ".into(),
        };
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
        let order = Order::from_form(&form, now);
        let wire = serde_json::to_value(&order).unwrap();
        assert_eq!(
            wire,
            json!({
                "customerName": "Ada",
                "customerEmail": "ada@example.com",
                "productCategory": "software",
                "productDetails": "A website",
                "budget": "about 500",
                "deadline": null,
                "status": "pending",
                "orderDate": "2025-01-15T10:00:00.000Z"
            })
        );
    }

    #[test]
    fn orders_read_numeric_budget_and_missing_fields() {
        let order: Order = serde_json::from_value(json!({
            "customerName": "Bo",
            "budget": 300,
            "status": "completed"
        }))
        .unwrap();
        assert_eq!(order.budget, "300");
        assert_eq!(order.deadline_label(), DEADLINE_MISSING);
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn blank_deadline_reads_as_not_specified() {
        let order: Order = serde_json::from_value(json!({"deadline": ""})).unwrap();
        assert_eq!(order.deadline_label(), DEADLINE_MISSING);
    }

    #[test]
    fn date_label_formats_known_shapes() {
        assert_eq!(date_label("not a date"), INVALID_DATE);
        assert_eq!(date_label("2025-03-04 12:00:00"), "3/4/2025");
        assert!(date_label("2025-03-04T12:00:00.000Z").ends_with("/2025"));
    }

    #[test]
    fn filter_matches_exact_category() {
        let only_design = CategoryFilter::parse("design");
        assert!(only_design.matches(&Category::Design));
        assert!(!only_design.matches(&Category::Software));
        assert!(CategoryFilter::parse("all").matches(&Category::Other("x".into())));
        assert_eq!(CategoryFilter::choices().len(), 5);
    }
}
