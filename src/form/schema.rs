//! Static catalog of the clinical inputs collected by the form.
//!
//! The order of [`FIELDS`] is the order the prediction service expects in the
//! submitted feature vector. Reordering entries changes the wire format.

/// How a field is entered by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free numeric text input.
    Numeric,
    /// Choice from a fixed option list.
    Enumerated,
}

/// One selectable value of an enumerated field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldOption {
    /// Raw value stored in the form and parsed on submit.
    pub value: &'static str,
    /// Display text.
    pub label: &'static str,
}

/// Presentation and encoding metadata for one clinical input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDescriptor {
    /// Unique key, also used as the form state key.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Ordered options; empty for numeric fields.
    pub options: &'static [FieldOption],
    /// Tooltip and glossary text.
    pub description: &'static str,
    /// Numeric granularity hint for numeric inputs.
    pub step: Option<f64>,
    /// Value the form starts with.
    pub default_value: &'static str,
}

impl FieldDescriptor {
    const fn numeric(name: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Numeric,
            options: &[],
            description,
            step: None,
            default_value: "",
        }
    }

    const fn enumerated(
        name: &'static str,
        label: &'static str,
        options: &'static [FieldOption],
        default_value: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Enumerated,
            options,
            description,
            step: None,
            default_value,
        }
    }

    const fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Numeric granularity, defaulting to whole numbers.
    pub fn effective_step(&self) -> f64 {
        self.step.unwrap_or(1.0)
    }

    /// Find the option whose raw value matches `value`.
    pub fn option_for(&self, value: &str) -> Option<&'static FieldOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

const fn opt(value: &'static str, label: &'static str) -> FieldOption {
    FieldOption { value, label }
}

/// Number of fields, and therefore the length of every submission vector.
pub const FIELD_COUNT: usize = 13;

/// The clinical inputs in wire order.
pub static FIELDS: [FieldDescriptor; FIELD_COUNT] = [
    FieldDescriptor::numeric("age", "Age", "Age of the patient in years."),
    FieldDescriptor::enumerated(
        "sex",
        "Sex",
        &[opt("1", "Male"), opt("0", "Female")],
        "1",
        "Biological sex of the patient.",
    ),
    FieldDescriptor::enumerated(
        "cp",
        "Chest Pain Type",
        &[
            opt("0", "Typical Angina"),
            opt("1", "Atypical Angina"),
            opt("2", "Non-anginal Pain"),
            opt("3", "Asymptomatic"),
        ],
        "0",
        "The type of chest pain reported by the patient.",
    ),
    FieldDescriptor::numeric(
        "trestbps",
        "Resting Blood Pressure",
        "Resting blood pressure in mm Hg on admission to the hospital.",
    ),
    FieldDescriptor::numeric("chol", "Cholesterol", "Serum cholesterol level in mg/dl."),
    FieldDescriptor::enumerated(
        "fbs",
        "Fasting Blood Sugar",
        &[opt("0", "< 120 mg/dl"), opt("1", "> 120 mg/dl")],
        "0",
        "Whether fasting blood sugar is greater than 120 mg/dl.",
    ),
    FieldDescriptor::enumerated(
        "restecg",
        "Resting ECG Results",
        &[
            opt("0", "Normal"),
            opt("1", "ST-T Wave Abnormality"),
            opt("2", "Left Ventricular Hypertrophy"),
        ],
        "0",
        "Resting electrocardiographic results.",
    ),
    FieldDescriptor::numeric(
        "thalach",
        "Max Heart Rate",
        "Maximum heart rate achieved during exercise.",
    ),
    FieldDescriptor::enumerated(
        "exang",
        "Exercise Induced Angina",
        &[opt("0", "No"), opt("1", "Yes")],
        "0",
        "Chest pain induced by exercise.",
    ),
    FieldDescriptor::numeric(
        "oldpeak",
        "ST Depression",
        "ST depression induced by exercise relative to rest.",
    )
    .with_step(0.1),
    FieldDescriptor::enumerated(
        "slope",
        "Peak Exercise ST Slope",
        &[opt("0", "Upsloping"), opt("1", "Flat"), opt("2", "Downsloping")],
        "0",
        "The slope of the peak exercise ST segment.",
    ),
    FieldDescriptor::enumerated(
        "ca",
        "Major Vessels (0-3)",
        &[opt("0", "0"), opt("1", "1"), opt("2", "2"), opt("3", "3")],
        "0",
        "Number of major vessels (0-3) colored by fluoroscopy.",
    ),
    FieldDescriptor::enumerated(
        "thal",
        "Thalassemia",
        &[opt("1", "Normal"), opt("2", "Fixed Defect"), opt("3", "Reversable Defect")],
        "1",
        "A blood disorder called thalassemia.",
    ),
];

/// Look up a descriptor by name.
pub fn field(name: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|descriptor| descriptor.name == name)
}

/// Position of a field in wire order.
pub fn field_index(name: &str) -> Option<usize> {
    FIELDS.iter().position(|descriptor| descriptor.name == name)
}
