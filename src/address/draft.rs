use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines the values entered on the address form.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDraft {
    pub country: String,
    pub name: String,
    pub mobile_no: String,
    pub house_no: String,
    pub street: String,
    pub landmark: String,
    pub postal_code: String,
}

/// Specifying the fields of an address, in the order they appear on screen.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AddressField {
    Country,
    Name,
    MobileNo,
    HouseNo,
    Street,
    Landmark,
    PostalCode,
}

impl AddressField {
    pub const ALL: [AddressField; 7] = [
        AddressField::Country,
        AddressField::Name,
        AddressField::MobileNo,
        AddressField::HouseNo,
        AddressField::Street,
        AddressField::Landmark,
        AddressField::PostalCode,
    ];

    /// Return the label shown on the input border.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            AddressField::Country => "Country",
            AddressField::Name => "Full name",
            AddressField::MobileNo => "Mobile number",
            AddressField::HouseNo => "House number",
            AddressField::Street => "Street",
            AddressField::Landmark => "Landmark",
            AddressField::PostalCode => "Postal code",
        }
    }

    /// Return the hint shown while the input is empty.
    ///
    pub fn placeholder(&self) -> &'static str {
        match self {
            AddressField::Country => "Enter your country",
            AddressField::Name => "Enter your name",
            AddressField::MobileNo => "Enter your mobile number",
            AddressField::HouseNo => "Enter your house number",
            AddressField::Street => "Enter your street",
            AddressField::Landmark => "Eg near apollo, hospital",
            AddressField::PostalCode => "Enter pincode",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, AddressField::Name | AddressField::MobileNo)
    }

    /// Position of the field in `ALL`.
    ///
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

impl AddressDraft {
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Country => &self.country,
            AddressField::Name => &self.name,
            AddressField::MobileNo => &self.mobile_no,
            AddressField::HouseNo => &self.house_no,
            AddressField::Street => &self.street,
            AddressField::Landmark => &self.landmark,
            AddressField::PostalCode => &self.postal_code,
        }
    }

    /// Mutable access to the value backing the field.
    ///
    pub fn get_mut(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::Country => &mut self.country,
            AddressField::Name => &mut self.name,
            AddressField::MobileNo => &mut self.mobile_no,
            AddressField::HouseNo => &mut self.house_no,
            AddressField::Street => &mut self.street,
            AddressField::Landmark => &mut self.landmark,
            AddressField::PostalCode => &mut self.postal_code,
        }
    }

    /// Replace the value of the field. No validation happens here.
    ///
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) -> &mut Self {
        *self.get_mut(field) = value.into();
        self
    }

    /// Reset every field to empty text.
    ///
    pub fn clear(&mut self) -> &mut Self {
        *self = AddressDraft::default();
        self
    }

    pub fn is_empty(&self) -> bool {
        AddressField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Return true when the draft carries both a name and a mobile number.
///
/// Whitespace-only values count as present; every other field may be empty.
///
pub fn is_submittable(draft: &AddressDraft) -> bool {
    !draft.name.is_empty() && !draft.mobile_no.is_empty()
}
