/// How a field is rendered and how its value is read back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
    Select(&'static [&'static str]),
    /// Several checkboxes sharing one name; the value is the list of checked options.
    Choices(&'static [&'static str]),
    /// Single checkbox, empty until checked.
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self { name, label, kind, required }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl StepSpec {
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }
}

pub const EMAIL_FIELD: &str = "email";
pub const INTERESTS_FIELD: &str = "interests";

const COUNTRIES: &[&str] = &[
    "Brazil",
    "Portugal",
    "United States",
    "United Kingdom",
    "Switzerland",
    "United Arab Emirates",
    "Other",
];

const INVESTOR_TYPES: &[&str] = &[
    "Individual",
    "Family Office",
    "Venture Capital",
    "Institutional",
    "Agribusiness Company",
];

const INVESTMENT_RANGES: &[&str] = &[
    "Up to $50,000",
    "$50,000 - $250,000",
    "$250,000 - $1,000,000",
    "Above $1,000,000",
];

const INTERESTS: &[&str] = &[
    "Equity",
    "Convertible Notes",
    "Carbon Credits",
    "Land Partnerships",
    "Strategic Partnership",
];

pub const LEAD_STEPS: &[StepSpec] = &[
    StepSpec {
        id: "personal",
        title: "Personal Info",
        fields: &[
            FieldSpec::new("full_name", "Full Name", FieldKind::Text, true),
            FieldSpec::new(EMAIL_FIELD, "Email", FieldKind::Email, true),
            FieldSpec::new("phone", "Phone", FieldKind::Tel, true),
            FieldSpec::new("country", "Country", FieldKind::Select(COUNTRIES), true),
        ],
    },
    StepSpec {
        id: "investment",
        title: "Investment Profile",
        fields: &[
            FieldSpec::new("investor_type", "Investor Type", FieldKind::Select(INVESTOR_TYPES), true),
            FieldSpec::new("investment_range", "Investment Range", FieldKind::Select(INVESTMENT_RANGES), true),
            FieldSpec::new(INTERESTS_FIELD, "Areas of Interest", FieldKind::Choices(INTERESTS), false),
        ],
    },
    StepSpec {
        id: "confirm",
        title: "Confirmation",
        fields: &[
            FieldSpec::new("message", "Anything we should know?", FieldKind::TextArea, false),
            FieldSpec::new("consent", "I agree to be contacted by a DeAgro investment advisor", FieldKind::Checkbox, true),
        ],
    },
];
