pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod record_locks;
    }
}

pub mod modules {
    pub mod leaves {
        pub mod core {
            pub mod lifecycle;
            pub mod record;
            pub mod status;
        }
        pub mod errors;
        pub mod service;
        pub mod use_cases {
            pub mod submit_leave {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod decide_leave {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_leave {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_leave {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_leaves {
                pub mod filters;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod balance_ledger;
                pub mod balance_ledger_in_memory;
                pub mod directory;
                pub mod directory_in_memory;
                pub mod ledger_effects;
                pub mod record_store;
                pub mod record_store_in_memory;
            }
        }
    }
}

pub mod shell;
