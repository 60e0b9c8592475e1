pub mod application {
    pub mod asset {
        pub mod register;
    }
    pub mod product {
        pub mod get_detail;
        pub mod list;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod asset {
        pub mod errors;
        pub mod model;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod get_detail;
            pub mod list;
        }
    }
    pub mod widget {
        pub mod model;
    }
}
