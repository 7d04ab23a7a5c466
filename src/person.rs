//! A record assembled through facet builders
//!
//! A [`Person`] has an address facet and an employment facet. It is only
//! reachable through [`Person::create`], and the builder hands it over once,
//! by value, when [`PersonBuilder::build`] consumes it.
//!
//! ```
//! use tagtree::Person;
//!
//! let mut builder = Person::create();
//! builder
//!     .lives()
//!     .at("123 London Road")
//!     .with_postcode("SW1 1GB")
//!     .in_city("London")
//!     .works()
//!     .at("PragmaSoft")
//!     .as_a("Consultant")
//!     .earning(10_000_000);
//! let person = builder.build();
//!
//! assert_eq!(person.city(), "London");
//! assert_eq!(person.annual_income(), 10_000_000);
//! ```

mod builder;

use std::fmt;

pub use self::builder::{PersonAddressBuilder, PersonBuilder, PersonJobBuilder};

#[derive(Debug, PartialEq, Eq)]
pub struct Person {
    // address
    street_address: String,
    post_code: String,
    city: String,

    // employment
    company_name: String,
    position: String,
    annual_income: u64,
}

impl Person {
    pub fn create() -> PersonBuilder {
        PersonBuilder::new(Self {
            street_address: String::new(),
            post_code: String::new(),
            city: String::new(),
            company_name: String::new(),
            position: String::new(),
            annual_income: 0,
        })
    }

    pub fn street_address(&self) -> &str {
        &self.street_address
    }

    pub fn post_code(&self) -> &str {
        &self.post_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn annual_income(&self) -> u64 {
        self.annual_income
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "street_address: {} post_code: {} city: {} company_name: {} position: {} annual_income: {}",
            self.street_address,
            self.post_code,
            self.city,
            self.company_name,
            self.position,
            self.annual_income
        )
    }
}
