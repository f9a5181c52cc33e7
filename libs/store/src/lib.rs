pub mod client;
pub mod utils;
pub mod batch {
    pub mod model;
    pub mod store;
}
pub mod block {
    pub mod store;
}
pub mod checkpoint {
    pub mod model;
    pub mod store;
}
pub mod failed {
    pub mod model;
    pub mod store;
}
pub mod token {
    pub mod model;
    pub mod pretty;
    pub mod store;
}
pub mod transfer {
    pub mod model;
    pub mod pretty;
    pub mod store;
}
