pub mod application {
    pub mod headline {
        pub mod apply;
        pub mod generate;
    }
    pub mod order {
        pub mod create;
        pub mod get_all;
        pub mod update_status;
    }
    pub mod product {
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod referral {
        pub mod create;
        pub mod get_all;
    }
    pub mod voucher {
        pub mod create;
        pub mod get_all;
        pub mod set_active;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod headline {
        pub mod errors;
        pub mod model;
        pub mod rate_limit;
        pub mod services;
        pub mod use_cases {
            pub mod apply;
            pub mod generate;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod update_status;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod referral {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod voucher {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod set_active;
        }
    }
}
