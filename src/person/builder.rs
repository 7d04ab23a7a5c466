use tracing::debug;

use super::Person;

/// Owns the person under construction and lends it to facet builders.
///
/// Only one facet builder can hold the person at a time:
///
/// ```compile_fail
/// use tagtree::Person;
///
/// let mut builder = Person::create();
/// let address = builder.lives();
/// builder.works().at("Acme");
/// address.at("1 Main Street");
/// ```
///
/// and none can outlive the hand-over:
///
/// ```compile_fail
/// use tagtree::Person;
///
/// let mut builder = Person::create();
/// let address = builder.lives();
/// let person = builder.build();
/// address.in_city("London");
/// ```
#[derive(Debug)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub(super) fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn lives(&mut self) -> PersonAddressBuilder<'_> {
        PersonAddressBuilder {
            person: &mut self.person,
        }
    }

    pub fn works(&mut self) -> PersonJobBuilder<'_> {
        PersonJobBuilder {
            person: &mut self.person,
        }
    }

    /// Hands over the finished person. The builder is gone afterwards.
    pub fn build(self) -> Person {
        debug!(city = %self.person.city, company = %self.person.company_name, "person built");
        self.person
    }
}

/// Sets the address facet
#[derive(Debug)]
pub struct PersonAddressBuilder<'a> {
    person: &'a mut Person,
}

impl<'a> PersonAddressBuilder<'a> {
    pub fn at(self, street_address: impl Into<String>) -> Self {
        self.person.street_address = street_address.into();
        self
    }

    pub fn with_postcode(self, post_code: impl Into<String>) -> Self {
        self.person.post_code = post_code.into();
        self
    }

    pub fn in_city(self, city: impl Into<String>) -> Self {
        self.person.city = city.into();
        self
    }

    /// Switches to the employment facet of the same person
    pub fn works(self) -> PersonJobBuilder<'a> {
        PersonJobBuilder {
            person: self.person,
        }
    }
}

/// Sets the employment facet
#[derive(Debug)]
pub struct PersonJobBuilder<'a> {
    person: &'a mut Person,
}

impl<'a> PersonJobBuilder<'a> {
    pub fn at(self, company_name: impl Into<String>) -> Self {
        self.person.company_name = company_name.into();
        self
    }

    pub fn as_a(self, position: impl Into<String>) -> Self {
        self.person.position = position.into();
        self
    }

    pub fn earning(self, annual_income: u64) -> Self {
        self.person.annual_income = annual_income;
        self
    }

    /// Switches to the address facet of the same person
    pub fn lives(self) -> PersonAddressBuilder<'a> {
        PersonAddressBuilder {
            person: self.person,
        }
    }
}
