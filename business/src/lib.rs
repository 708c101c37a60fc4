pub mod application {
    pub mod outfit {
        pub mod recommend;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod builder;
        pub mod classifier;
        pub mod model;
        pub mod repository;
    }
    pub mod outfit {
        pub mod errors;
        pub mod extractor;
        pub mod model;
        pub mod prompt;
        pub mod recommender;
        pub mod sanitizer;
        pub mod services;
        pub mod use_cases {
            pub mod recommend;
        }
    }
}
