//! Form field identifiers and option sets

use std::fmt;
use std::str::FromStr;

use super::FormError;

/// How a field is edited on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Radio,
    Date,
    Dropdown,
}

/// One of the seven admission form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Address,
    Mobile,
    Email,
    Gender,
    DateOfBirth,
    Course,
}

impl Field {
    pub const COUNT: usize = 7;

    /// All fields in display order
    pub const ALL: [Field; Field::COUNT] = [
        Field::Name,
        Field::Address,
        Field::Mobile,
        Field::Email,
        Field::Gender,
        Field::DateOfBirth,
        Field::Course,
    ];

    /// Slot of this field in fixed-size per-field storage
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Mobile => "mobile",
            Self::Email => "email",
            Self::Gender => "gender",
            Self::DateOfBirth => "dob",
            Self::Course => "course",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Mobile => "Mobile Number",
            Self::Email => "Email",
            Self::Gender => "Gender",
            Self::DateOfBirth => "Date of Birth",
            Self::Course => "Select Course",
        }
    }

    /// Inline text shown beneath the field while its error flag is set
    pub fn helper_text(self) -> &'static str {
        match self {
            Self::Name => "Name must contain no numbers",
            Self::Address => "Address must be at least 10 characters long",
            Self::Mobile => "Invalid mobile number",
            Self::Email => "Invalid email address",
            Self::Gender => "Please select a gender",
            Self::DateOfBirth => "Please select a valid date",
            Self::Course => "Please select a course",
        }
    }

    /// Label used in the submission summary
    pub fn summary_label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Mobile => "Mobile",
            Self::Email => "Email",
            Self::Gender => "Gender",
            Self::DateOfBirth => "DOB",
            Self::Course => "Course",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Name | Self::Mobile | Self::Email => FieldKind::Text,
            Self::Address => FieldKind::Multiline,
            Self::Gender => FieldKind::Radio,
            Self::DateOfBirth => FieldKind::Date,
            Self::Course => FieldKind::Dropdown,
        }
    }

    /// Selectable option values for radio and dropdown fields
    pub fn options(self) -> Vec<&'static str> {
        match self {
            Self::Gender => Gender::ALL.iter().map(|g| g.as_str()).collect(),
            Self::Course => Course::ALL.iter().map(|c| c.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "address" => Ok(Self::Address),
            "mobile" => Ok(Self::Mobile),
            "email" => Ok(Self::Email),
            "gender" => Ok(Self::Gender),
            "dob" | "date_of_birth" | "dateOfBirth" => Ok(Self::DateOfBirth),
            "course" => Ok(Self::Course),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Gender radio options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Other => "Other",
        }
    }
}

/// Course dropdown options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    Biology,
    ComputerScience,
    Commerce,
    Humanities,
}

impl Course {
    pub const ALL: [Course; 4] = [
        Course::Biology,
        Course::ComputerScience,
        Course::Commerce,
        Course::Humanities,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Biology => "Biology",
            Self::ComputerScience => "Computer Science",
            Self::Commerce => "Commerce",
            Self::Humanities => "Humanities",
        }
    }
}

/// Field-keyed boolean map with exactly one slot per [`Field`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldFlags([bool; Field::COUNT]);

impl FieldFlags {
    pub fn get(&self, field: Field) -> bool {
        self.0[field.index()]
    }

    pub fn set(&mut self, field: Field, flag: bool) {
        self.0[field.index()] = flag;
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&flag| flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, bool)> + '_ {
        Field::ALL.iter().map(move |&field| (field, self.get(field)))
    }
}
