pub mod ip_resolver;
