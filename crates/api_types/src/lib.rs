//! Request and response bodies of the HTTP surface.
//!
//! Request types keep every field optional: presence is validated by the
//! handlers and the engine (in the documented order), not by serde
//! rejections, so a missing field yields the service's own `{"error": ...}`
//! body instead of a generic deserialization failure.
//!
//! Monetary fields are decimal currency values (`2.00`, `1.75`); the engine
//! stores integer cents and converts at this boundary.

use serde::{Deserialize, Serialize};

pub mod user {
    use super::*;

    /// Request body for creating a user. `balance` defaults to 0.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserNew {
        pub name: Option<String>,
        pub netid: Option<String>,
        pub balance: Option<f64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserView {
        pub id: i32,
        pub name: String,
        pub netid: String,
        pub balance: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UsersResponse {
        pub users: Vec<UserView>,
    }
}

pub mod dorm {
    use super::*;

    /// Request body for creating a dorm. The building name travels under the
    /// `dorm` key.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DormNew {
        pub dorm: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DormView {
        pub id: i32,
        pub dorm: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DormsResponse {
        pub dorms: Vec<DormView>,
    }
}

pub mod laundry {
    use super::*;
    use crate::laundry_time::LaundryTimeView;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LaundryNew {
        pub laundry_number: Option<i32>,
        pub laundry_type: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LaundryView {
        pub id: i32,
        pub dorm_id: i32,
        pub laundry_number: i32,
        pub laundry_type: String,
        /// Fixed per-use cost, derived from the machine type at creation.
        pub cost: f64,
    }

    /// Response for the machine read: the bare machine, or its first
    /// recorded usage session when one exists.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum LaundryLookupResponse {
        Session(LaundryTimeView),
        Machine(LaundryView),
    }
}

pub mod laundry_time {
    use super::*;

    /// Request body for reserving a machine.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct LaundryTimeNew {
        /// Minutes; any provided value is accepted as-is.
        pub duration: Option<i32>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LaundryTimeView {
        pub id: i32,
        pub laundry_id: i32,
        pub user_id: i32,
        pub duration: i32,
    }
}

pub mod transaction {
    use super::*;

    /// Request body for a balance adjustment. Positive = deposit, negative =
    /// withdrawal; the response is the updated user.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub amount: Option<f64>,
    }
}
