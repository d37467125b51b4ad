//! Resource catalogue.
//!
//! Every dashboard page is one [`ResourceSpec`]: where to fetch it, how its
//! response is wrapped, how it pages, which statuses it accepts and how its
//! fields are laid out in the table and the detail view.

use std::fmt;
use std::str::FromStr;

use crate::error::{GavelError, Result};
use crate::session::{Role, Session};

/// Resources exposed by the platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Customers,
    Sellers,
    Orders,
    SellerHistory,
    Inventory,
    Transactions,
    Deposits,
    Withdrawals,
    Subscriptions,
    Feedback,
    ProductFeedback,
    Contacts,
    Privacy,
    Reports,
    Notifications,
}

impl Resource {
    pub const ALL: [Resource; 15] = [
        Resource::Customers,
        Resource::Sellers,
        Resource::Orders,
        Resource::SellerHistory,
        Resource::Inventory,
        Resource::Transactions,
        Resource::Deposits,
        Resource::Withdrawals,
        Resource::Subscriptions,
        Resource::Feedback,
        Resource::ProductFeedback,
        Resource::Contacts,
        Resource::Privacy,
        Resource::Reports,
        Resource::Notifications,
    ];

    /// Command-line name, e.g. `seller-history`.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn spec(self) -> &'static ResourceSpec {
        match self {
            Resource::Customers => &CUSTOMERS,
            Resource::Sellers => &SELLERS,
            Resource::Orders => &ORDERS,
            Resource::SellerHistory => &SELLER_HISTORY,
            Resource::Inventory => &INVENTORY,
            Resource::Transactions => &TRANSACTIONS,
            Resource::Deposits => &DEPOSITS,
            Resource::Withdrawals => &WITHDRAWALS,
            Resource::Subscriptions => &SUBSCRIPTIONS,
            Resource::Feedback => &FEEDBACK,
            Resource::ProductFeedback => &PRODUCT_FEEDBACK,
            Resource::Contacts => &CONTACTS,
            Resource::Privacy => &PRIVACY,
            Resource::Reports => &REPORTS,
            Resource::Notifications => &NOTIFICATIONS,
        }
    }

    /// Resources the given role may browse, in catalogue order.
    pub fn visible_to(role: Role) -> Vec<Resource> {
        Self::ALL
            .into_iter()
            .filter(|r| r.spec().roles.contains(&role))
            .collect()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Resource {
    type Err = GavelError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| {
                unicase::eq(r.name(), wanted)
                    || r.spec().aliases.iter().any(|a| unicase::eq(*a, wanted))
            })
            .ok_or_else(|| GavelError::UnknownResource(wanted.to_string()))
    }
}

/// Who decides page boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    /// The whole collection is fetched once and sliced locally.
    Client,
    /// Each page is requested with `page` and `limit` query parameters.
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    Put,
    Patch,
}

impl WriteMethod {
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            WriteMethod::Put => reqwest::Method::PUT,
            WriteMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Status write endpoint and vocabulary of a resource.
#[derive(Debug)]
pub struct StatusUpdate {
    pub method: WriteMethod,
    /// Collection path; the record id is appended as a segment.
    pub path: &'static str,
    /// Segment after the id, as in `/api/sellers/{id}/status`.
    pub suffix: Option<&'static str>,
    pub statuses: &'static [&'static str],
}

/// How a field value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Text,
    /// `$1234.50`
    Currency,
    /// Calendar date in local time.
    Date,
    /// Date and time in local time.
    DateTime,
    /// Bank account number with the middle digits hidden.
    AccountNumber,
    /// First eight characters of an identifier.
    ShortId,
    /// Numeric 0-5 rating as stars.
    Stars,
    /// Average of `excellent`/`good`/`bad` answers as stars.
    OverallRating,
    /// Privacy request type label (`optout` -> `Opt Out`).
    RequestType,
    /// Kebab-case value shown in title case (`payment-deposit` -> `Payment Deposit`).
    Label,
    /// Booleans as `Yes`/`No`.
    YesNo,
    /// Booleans as `Verified`/`Not verified`.
    Verified,
    /// Booleans as `Read`/`Unread`.
    ReadState,
    /// Arrays joined with commas.
    List,
    /// Status value, colored by the view.
    Status,
}

/// One table column or detail field.
#[derive(Debug)]
pub struct Column {
    pub label: &'static str,
    /// Source fields, first present wins.
    pub sources: &'static [&'static str],
    pub format: FieldFormat,
    pub fallback: &'static str,
}

const fn col(
    label: &'static str,
    sources: &'static [&'static str],
    format: FieldFormat,
    fallback: &'static str,
) -> Column {
    Column {
        label,
        sources,
        format,
        fallback,
    }
}

/// Static description of a resource.
#[derive(Debug)]
pub struct ResourceSpec {
    pub resource: Resource,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub title: &'static str,
    /// List endpoint. `{email}` is replaced by the session email.
    pub path: &'static str,
    /// Key holding the array when the response is wrapped in an object.
    pub envelope_key: Option<&'static str>,
    pub paging: PagingMode,
    /// A 404 on the list endpoint means "no records yet".
    pub not_found_is_empty: bool,
    pub status_update: Option<StatusUpdate>,
    /// Collection path that accepts `PATCH {id}` with `{"read": true}`
    /// once a record has been viewed.
    pub read_receipt: Option<&'static str>,
    pub columns: &'static [Column],
    pub detail: &'static [Column],
    pub roles: &'static [Role],
}

impl ResourceSpec {
    pub fn supports_status(&self) -> bool {
        self.status_update.is_some()
    }

    pub fn statuses(&self) -> &'static [&'static str] {
        match &self.status_update {
            Some(update) => update.statuses,
            None => &[],
        }
    }

    /// Validate a status against the resource vocabulary, returning the
    /// canonical spelling.
    pub fn validate_status(&self, status: &str) -> Result<&'static str> {
        let update = self
            .status_update
            .as_ref()
            .ok_or(GavelError::StatusNotSupported {
                resource: self.name,
            })?;
        let wanted = status.trim();
        update
            .statuses
            .iter()
            .copied()
            .find(|s| unicase::eq(*s, wanted))
            .ok_or_else(|| GavelError::InvalidStatus {
                resource: self.name,
                status: wanted.to_string(),
                expected: update.statuses.join(", "),
            })
    }

    /// List path with session placeholders filled in.
    pub fn list_path(&self, session: &Session) -> Result<String> {
        if !self.path.contains("{email}") {
            return Ok(self.path.to_string());
        }
        let email = session.email().ok_or(GavelError::MissingSessionEmail)?;
        Ok(self.path.replace("{email}", email))
    }

    pub fn check_role(&self, role: Role) -> Result<()> {
        if self.roles.contains(&role) {
            Ok(())
        } else {
            Err(GavelError::Forbidden {
                resource: self.name,
                role: role.to_string(),
            })
        }
    }
}

// ============================================================================
// Catalogue
// ============================================================================

const ADMIN: &[Role] = &[Role::Admin];
const EVERYONE: &[Role] = &[Role::Admin, Role::Seller];

use FieldFormat::*;

static CUSTOMERS: ResourceSpec = ResourceSpec {
    resource: Resource::Customers,
    name: "customers",
    aliases: &["customer", "users"],
    title: "Customers",
    path: "/api/admin/customers",
    envelope_key: Some("data"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: None,
    read_receipt: None,
    columns: &[
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["email"], Text, "N/A"),
        col("Phone", &["phoneNo"], Text, "Not added"),
        col("Balance", &["amount"], Currency, "$0.00"),
        col("Country", &["country"], Text, "N/A"),
        col("Verified", &["isVerified"], Verified, "Not verified"),
    ],
    detail: &[
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["email"], Text, "N/A"),
        col("Phone", &["phoneNo"], Text, "Not added"),
        col("Alternative phone", &["alternativePhoneNo"], Text, "Not added"),
        col("Gender", &["gender"], Text, "Not specified"),
        col("Balance", &["amount"], Currency, "$0.00"),
        col("Address", &["address"], Text, "Not added"),
        col("City", &["city"], Text, "Not added"),
        col("State", &["state"], Text, "Not added"),
        col("Country", &["country"], Text, "Not added"),
        col("Pin code", &["pinCode"], Text, "Not added"),
        col("Verified", &["isVerified"], Verified, "Not verified"),
        col("Joined", &["createdAt"], Date, "N/A"),
    ],
    roles: ADMIN,
};

static SELLERS: ResourceSpec = ResourceSpec {
    resource: Resource::Sellers,
    name: "sellers",
    aliases: &["seller", "stores"],
    title: "Sellers",
    path: "/api/sellers",
    envelope_key: Some("sellers"),
    paging: PagingMode::Server,
    not_found_is_empty: false,
    status_update: Some(StatusUpdate {
        method: WriteMethod::Patch,
        path: "/api/sellers",
        suffix: Some("status"),
        statuses: &["active", "pending_approval", "suspended"],
    }),
    read_receipt: None,
    columns: &[
        col("Name", &["name"], Text, "N/A"),
        col("Store", &["storeName"], Text, "No store name"),
        col("Email", &["email"], Text, "N/A"),
        col("Joined", &["createdAt"], Date, "N/A"),
        col("Status", &["status"], Status, "pending_approval"),
        col("Verified", &["isVerified"], Verified, "Not verified"),
    ],
    detail: &[
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["email"], Text, "N/A"),
        col("Store", &["storeName"], Text, "Not set"),
        col("Phone", &["phone"], Text, "Not provided"),
        col("Joined", &["createdAt"], Date, "N/A"),
        col("Status", &["status"], Status, "pending_approval"),
        col("Verified", &["isVerified"], Verified, "Not verified"),
    ],
    roles: ADMIN,
};

static ORDERS: ResourceSpec = ResourceSpec {
    resource: Resource::Orders,
    name: "orders",
    aliases: &["order"],
    title: "Orders",
    path: "/api/orders",
    envelope_key: Some("orders"),
    paging: PagingMode::Server,
    not_found_is_empty: false,
    status_update: None,
    read_receipt: None,
    columns: &[
        col("Item", &["itemName"], Text, "N/A"),
        col("Buyer", &["userEmail"], Text, "N/A"),
        col("Seller", &["sellerEmail"], Text, "N/A"),
        col("Starting", &["startingPrice"], Currency, "N/A"),
        col("Sold", &["soldPrice"], Currency, "N/A"),
    ],
    detail: &[
        col("Order", &["_id"], Text, "N/A"),
        col("Item", &["itemName"], Text, "N/A"),
        col("Buyer", &["userEmail"], Text, "N/A"),
        col("Seller", &["sellerEmail"], Text, "N/A"),
        col("Starting price", &["startingPrice"], Currency, "N/A"),
        col("Sold price", &["soldPrice"], Currency, "N/A"),
        col("Placed", &["createdAt"], DateTime, "N/A"),
    ],
    roles: ADMIN,
};

static SELLER_HISTORY: ResourceSpec = ResourceSpec {
    resource: Resource::SellerHistory,
    name: "seller-history",
    aliases: &["history", "sales"],
    title: "Seller History",
    path: "/api/orders",
    envelope_key: Some("orders"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: None,
    read_receipt: None,
    columns: &[
        col("Item", &["itemName"], Text, "N/A"),
        col("Seller", &["sellerEmail"], Text, "N/A"),
        col("Buyer", &["buyerEmail", "userEmail"], Text, "N/A"),
        col("Starting", &["startingPrice"], Currency, "N/A"),
        col("Highest bid", &["highestBid", "soldPrice"], Currency, "N/A"),
    ],
    detail: &[
        col("Item", &["itemName"], Text, "N/A"),
        col("Seller", &["sellerEmail"], Text, "N/A"),
        col("Buyer", &["buyerEmail", "userEmail"], Text, "N/A"),
        col("Buyer name", &["name"], Text, "N/A"),
        col("Shipping address", &["address"], Text, "N/A"),
        col("Starting price", &["startingPrice"], Currency, "N/A"),
        col("Highest bid", &["highestBid", "soldPrice"], Currency, "N/A"),
        col("Date", &["createdAt"], DateTime, "N/A"),
    ],
    roles: ADMIN,
};

static INVENTORY: ResourceSpec = ResourceSpec {
    resource: Resource::Inventory,
    name: "inventory",
    aliases: &["products", "listings"],
    title: "Inventory",
    path: "/api/products/",
    envelope_key: Some("products"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: None,
    read_receipt: None,
    columns: &[
        col("Product", &["name"], Text, "N/A"),
        col("Category", &["category"], Text, "N/A"),
        col("Starting bid", &["biddingStartPrice"], Currency, "N/A"),
        col("Seller", &["email"], Text, "N/A"),
        col("Bidding starts", &["biddingStartDate"], Date, "N/A"),
        col("Status", &["status"], Status, "Active"),
    ],
    detail: &[
        col("Product", &["name"], Text, "N/A"),
        col("Category", &["category"], Text, "N/A"),
        col("Starting bid", &["biddingStartPrice"], Currency, "N/A"),
        col("Seller", &["email"], Text, "N/A"),
        col("Bidding starts", &["biddingStartDate"], Date, "N/A"),
        col("Start time", &["biddingStartTime"], Text, "N/A"),
        col("Status", &["status"], Status, "Active"),
    ],
    roles: ADMIN,
};

static TRANSACTIONS: ResourceSpec = ResourceSpec {
    resource: Resource::Transactions,
    name: "transactions",
    aliases: &["transaction", "payments"],
    title: "Transactions",
    path: "/api/transactions",
    envelope_key: Some("transactions"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: None,
    read_receipt: None,
    columns: &[
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["userEmail"], Text, "N/A"),
        col("Amount", &["amount"], Currency, "N/A"),
        col("Type", &["type"], Label, "N/A"),
        col("Date", &["date", "createdAt"], Date, "N/A"),
    ],
    detail: &[
        col("Transaction", &["_id"], Text, "N/A"),
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["userEmail"], Text, "N/A"),
        col("Amount", &["amount"], Currency, "N/A"),
        col("Type", &["type"], Label, "N/A"),
        col("Date", &["date", "createdAt"], DateTime, "N/A"),
    ],
    roles: ADMIN,
};

static DEPOSITS: ResourceSpec = ResourceSpec {
    resource: Resource::Deposits,
    name: "deposits",
    aliases: &["deposit"],
    title: "Deposits",
    path: "/api/transactions/type/deposit",
    envelope_key: Some("transactions"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: None,
    read_receipt: None,
    columns: &[
        col("ID", &["_id"], ShortId, "N/A"),
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["userEmail"], Text, "N/A"),
        col("Amount", &["amount"], Currency, "N/A"),
        col("Date", &["date", "createdAt"], Date, "N/A"),
    ],
    detail: &[
        col("Deposit", &["_id"], Text, "N/A"),
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["userEmail"], Text, "N/A"),
        col("Amount", &["amount"], Currency, "N/A"),
        col("Type", &["type"], Label, "N/A"),
        col("Date", &["date", "createdAt"], DateTime, "N/A"),
    ],
    roles: ADMIN,
};

static WITHDRAWALS: ResourceSpec = ResourceSpec {
    resource: Resource::Withdrawals,
    name: "withdrawals",
    aliases: &["withdrawal", "withdraw"],
    title: "Withdrawals",
    path: "/api/transactions/type/withdrawal",
    envelope_key: Some("transactions"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: Some(StatusUpdate {
        method: WriteMethod::Put,
        path: "/api/transactions",
        suffix: None,
        statuses: &["pending", "processing", "completed", "rejected"],
    }),
    read_receipt: None,
    columns: &[
        col("ID", &["_id"], ShortId, "N/A"),
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["userEmail"], Text, "N/A"),
        col("Amount", &["amount"], Currency, "N/A"),
        col("Date", &["date", "createdAt"], Date, "N/A"),
        col("Status", &["status"], Status, "pending"),
    ],
    detail: &[
        col("Withdrawal", &["_id"], Text, "N/A"),
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["userEmail"], Text, "N/A"),
        col("Amount", &["amount"], Currency, "N/A"),
        col("Account", &["accountNumber"], AccountNumber, "N/A"),
        col("Bank", &["bankName"], Text, "N/A"),
        col("Type", &["type"], Label, "N/A"),
        col("Date", &["date", "createdAt"], DateTime, "N/A"),
        col("Status", &["status"], Status, "pending"),
    ],
    roles: ADMIN,
};

static SUBSCRIPTIONS: ResourceSpec = ResourceSpec {
    resource: Resource::Subscriptions,
    name: "subscriptions",
    aliases: &["subscription", "plans"],
    title: "Subscriptions",
    path: "/api/subscriptions",
    envelope_key: Some("subscriptions"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: None,
    read_receipt: None,
    columns: &[
        col("Plan", &["planName"], Text, "N/A"),
        col("Email", &["userEmail"], Text, "N/A"),
        col("Price", &["price"], Currency, "N/A"),
        col("Start", &["startDate"], Date, "N/A"),
        col("End", &["endDate"], Date, "N/A"),
        col("Status", &["status"], Status, "N/A"),
    ],
    detail: &[
        col("Plan", &["planName"], Text, "N/A"),
        col("Email", &["userEmail"], Text, "N/A"),
        col("Price", &["price"], Currency, "N/A"),
        col("Start", &["startDate"], Date, "N/A"),
        col("End", &["endDate"], Date, "N/A"),
        col("Auto renew", &["autoRenew"], YesNo, "No"),
        col("Features", &["features"], List, "None"),
        col("Status", &["status"], Status, "N/A"),
    ],
    roles: EVERYONE,
};

static FEEDBACK: ResourceSpec = ResourceSpec {
    resource: Resource::Feedback,
    name: "feedback",
    aliases: &["user-feedback"],
    title: "User Feedback",
    path: "/api/feedback/user",
    envelope_key: Some("feedbacks"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: None,
    read_receipt: None,
    columns: &[
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["email"], Text, "N/A"),
        col("Phone", &["phone"], Text, "N/A"),
        col("Overall", &["checkbox_values"], OverallRating, "N/A"),
        col("Date", &["createdAt"], Date, "N/A"),
    ],
    detail: &[
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["email"], Text, "N/A"),
        col("Phone", &["phone"], Text, "N/A"),
        col("Overall rating", &["checkbox_values"], OverallRating, "N/A"),
        col("Answers", &["checkbox_values"], List, "N/A"),
        col("Comments", &["message", "comments"], Text, "N/A"),
        col("Submitted", &["createdAt"], DateTime, "N/A"),
    ],
    roles: ADMIN,
};

static PRODUCT_FEEDBACK: ResourceSpec = ResourceSpec {
    resource: Resource::ProductFeedback,
    name: "product-feedback",
    aliases: &["reviews"],
    title: "Product Feedback",
    path: "/api/product-feedback/seller/{email}",
    envelope_key: Some("feedbacks"),
    paging: PagingMode::Client,
    not_found_is_empty: true,
    status_update: None,
    read_receipt: None,
    columns: &[
        col("Product", &["productName"], Text, "N/A"),
        col("Buyer", &["userEmail"], Text, "N/A"),
        col("Rating", &["rating"], Stars, "N/A"),
        col("Date", &["createdAt"], Date, "N/A"),
    ],
    detail: &[
        col("Product", &["productName"], Text, "N/A"),
        col("Buyer", &["userEmail"], Text, "N/A"),
        col("Order", &["orderId"], Text, "N/A"),
        col("Rating", &["rating"], Stars, "N/A"),
        col("Review", &["reviewText"], Text, "No review text"),
        col("Date", &["createdAt"], DateTime, "N/A"),
    ],
    roles: EVERYONE,
};

static CONTACTS: ResourceSpec = ResourceSpec {
    resource: Resource::Contacts,
    name: "contacts",
    aliases: &["contact", "messages"],
    title: "Contact Messages",
    path: "/api/contact",
    envelope_key: Some("contacts"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: None,
    read_receipt: None,
    columns: &[
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["email"], Text, "N/A"),
        col("Subject", &["subject"], Text, "No subject"),
        col("Date", &["createdAt"], Date, "N/A"),
    ],
    detail: &[
        col("Name", &["name"], Text, "N/A"),
        col("Email", &["email"], Text, "N/A"),
        col("Subject", &["subject"], Text, "No subject"),
        col("Message", &["message"], Text, "No message"),
        col("Received", &["createdAt"], DateTime, "N/A"),
    ],
    roles: EVERYONE,
};

static PRIVACY: ResourceSpec = ResourceSpec {
    resource: Resource::Privacy,
    name: "privacy",
    aliases: &["privacy-requests"],
    title: "Privacy Requests",
    path: "/api/privacy/",
    envelope_key: Some("data"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: Some(StatusUpdate {
        method: WriteMethod::Put,
        path: "/api/privacy",
        suffix: None,
        statuses: &["pending", "in-progress", "completed", "rejected"],
    }),
    read_receipt: None,
    columns: &[
        col("Name", &["fullName"], Text, "N/A"),
        col("Email", &["email"], Text, "N/A"),
        col("Request", &["requestType"], RequestType, "Other"),
        col("Date", &["createdAt"], Date, "N/A"),
        col("Status", &["status"], Status, "pending"),
    ],
    detail: &[
        col("Name", &["fullName"], Text, "N/A"),
        col("Email", &["email"], Text, "N/A"),
        col("Request", &["requestType"], RequestType, "Other"),
        col("Details", &["details"], Text, "No details provided"),
        col("Submitted", &["createdAt"], DateTime, "N/A"),
        col("Status", &["status"], Status, "pending"),
    ],
    roles: ADMIN,
};

static REPORTS: ResourceSpec = ResourceSpec {
    resource: Resource::Reports,
    name: "reports",
    aliases: &["report"],
    title: "User Reports",
    path: "/api/admin/reports",
    envelope_key: Some("data"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: Some(StatusUpdate {
        method: WriteMethod::Put,
        path: "/api/admin/reports",
        suffix: None,
        statuses: &["pending", "in-progress", "resolved", "closed"],
    }),
    read_receipt: None,
    columns: &[
        col("User", &["userName"], Text, "Unknown User"),
        col("Email", &["userEmail"], Text, "No email"),
        col("Type", &["reportType"], Label, "Other"),
        col("Date", &["date", "createdAt"], Date, "N/A"),
        col("Status", &["status"], Status, "pending"),
    ],
    detail: &[
        col("User", &["userName"], Text, "Unknown User"),
        col("Email", &["userEmail"], Text, "No email"),
        col("Type", &["reportType"], Label, "Other"),
        col("Order", &["orderId"], Text, "N/A"),
        col("Report", &["report"], Text, "No details provided"),
        col("Date", &["date", "createdAt"], DateTime, "N/A"),
        col("Status", &["status"], Status, "pending"),
    ],
    roles: ADMIN,
};

static NOTIFICATIONS: ResourceSpec = ResourceSpec {
    resource: Resource::Notifications,
    name: "notifications",
    aliases: &["notification", "inbox"],
    title: "Notifications",
    path: "/api/notifications",
    envelope_key: Some("notifications"),
    paging: PagingMode::Client,
    not_found_is_empty: false,
    status_update: None,
    read_receipt: Some("/api/notifications"),
    columns: &[
        col("Title", &["title"], Text, "Untitled"),
        col("Priority", &["priority"], Label, "normal"),
        col("Read", &["read"], ReadState, "Unread"),
        col("Date", &["createdAt"], Date, "N/A"),
    ],
    detail: &[
        col("Title", &["title"], Text, "Untitled"),
        col("Message", &["message"], Text, "No message"),
        col("Priority", &["priority"], Label, "normal"),
        col("Read", &["read"], ReadState, "Unread"),
        col("Received", &["createdAt"], DateTime, "N/A"),
    ],
    roles: EVERYONE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!(
            "seller-history".parse::<Resource>().unwrap(),
            Resource::SellerHistory
        );
        assert_eq!(
            "Withdraw".parse::<Resource>().unwrap(),
            Resource::Withdrawals
        );
        assert!(matches!(
            "bids".parse::<Resource>(),
            Err(GavelError::UnknownResource(name)) if name == "bids"
        ));
    }

    #[test]
    fn test_every_spec_points_back_to_its_resource() {
        for resource in Resource::ALL {
            let spec = resource.spec();
            assert_eq!(spec.resource, resource);
            assert!(!spec.columns.is_empty());
            assert!(!spec.detail.is_empty());
            assert!(!spec.roles.is_empty());
        }
    }

    #[test]
    fn test_status_vocabularies() {
        assert_eq!(
            Resource::Withdrawals.spec().statuses(),
            &["pending", "processing", "completed", "rejected"]
        );
        assert_eq!(
            Resource::Reports.spec().statuses(),
            &["pending", "in-progress", "resolved", "closed"]
        );
        assert!(Resource::Orders.spec().statuses().is_empty());
        assert_eq!(
            Resource::Sellers.spec().validate_status("Pending_Approval").unwrap(),
            "pending_approval"
        );
    }

    #[test]
    fn test_write_endpoints() {
        let sellers = Resource::Sellers.spec().status_update.as_ref().unwrap();
        assert_eq!(sellers.method, WriteMethod::Patch);
        assert_eq!(sellers.suffix, Some("status"));

        let withdrawals = Resource::Withdrawals.spec().status_update.as_ref().unwrap();
        assert_eq!(withdrawals.method, WriteMethod::Put);
        assert_eq!(withdrawals.suffix, None);

        let with_receipts: Vec<_> = Resource::ALL
            .into_iter()
            .filter(|r| r.spec().read_receipt.is_some())
            .collect();
        assert_eq!(with_receipts, [Resource::Notifications]);
    }

    #[test]
    fn test_validate_status_is_case_insensitive() {
        let spec = Resource::Privacy.spec();
        assert_eq!(spec.validate_status("In-Progress").unwrap(), "in-progress");
        assert!(matches!(
            spec.validate_status("resolved"),
            Err(GavelError::InvalidStatus { .. })
        ));
        assert!(matches!(
            Resource::Customers.spec().validate_status("pending"),
            Err(GavelError::StatusNotSupported { resource: "customers" })
        ));
    }

    #[test]
    fn test_list_path_substitutes_email() {
        let spec = Resource::ProductFeedback.spec();
        let session = Session::new(None, Some("seller@example.com".to_string()), Role::Seller);
        assert_eq!(
            spec.list_path(&session).unwrap(),
            "/api/product-feedback/seller/seller@example.com"
        );

        let anonymous = Session::new(None, None, Role::Seller);
        assert!(matches!(
            spec.list_path(&anonymous),
            Err(GavelError::MissingSessionEmail)
        ));
    }

    #[test]
    fn test_role_visibility() {
        let seller = Resource::visible_to(Role::Seller);
        assert!(seller.contains(&Resource::ProductFeedback));
        assert!(seller.contains(&Resource::Contacts));
        assert!(!seller.contains(&Resource::Customers));

        let admin = Resource::visible_to(Role::Admin);
        assert_eq!(admin.len(), Resource::ALL.len());
        assert!(Resource::Customers.spec().check_role(Role::Seller).is_err());
    }
}
