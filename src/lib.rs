pub mod shared {
    pub mod core {
        pub mod patch;
        pub mod record;
    }
    pub mod inbound {
        pub mod response;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod customers {
        pub mod core {
            pub mod customer;
        }
    }
    pub mod students {
        pub mod core {
            pub mod student;
        }
    }
    pub mod records {
        pub mod routes;
        pub mod state;
        pub mod use_cases {
            pub mod list_records {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod find_record {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_record {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod replace_record {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod patch_record {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_record {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod greetings {
        pub mod core {
            pub mod palindrome;
        }
        pub mod use_cases {
            pub mod greet {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod check_palindrome {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod league {
        pub mod core {
            pub mod club;
            pub mod coach;
            pub mod football_association;
            pub mod football_competition;
            pub mod player;
            pub mod ports;
            pub mod relation;
        }
        pub mod use_cases {
            pub mod register_club {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod load_club_roster {
                pub mod handler;
                pub mod roster;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod describe_schema {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod league_in_memory;
            }
        }
        pub mod errors;
        pub mod routes;
        pub mod seed;
        pub mod state;
    }
}

pub mod shell;
