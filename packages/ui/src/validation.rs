//! Client-side form validation.
//!
//! Every form is a plain struct implementing [`Form`]. Components validate a
//! single field when it loses focus ([`Form::check`]), clear that field's
//! error as soon as the user types, and validate everything on submit
//! ([`Form::validate`]). The server validates again; these checks only save a
//! round trip.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use api::ExpenseCategory;
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-\(\)]{10,}$").expect("valid phone regex"));

const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const MSG_NAME_REQUIRED: &str = "Name is required";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_INVALID_PHONE: &str = "Please enter a valid phone number";
pub const MSG_WEAK_PASSWORD: &str =
    "Password must be at least 7 characters with uppercase, number, and special character";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_IDENTIFIER_REQUIRED: &str = "Email or phone is required";
pub const MSG_CONTACT_REQUIRED: &str = "Either email or phone is required";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whitespace is ignored; at least ten digits, dashes or parentheses with an
/// optional leading `+`.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// At least 7 characters with an uppercase letter, a digit and a special
/// character.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 7
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Every validated input across the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    LoginIdentifier,
    LoginPassword,
    SignupName,
    SignupEmail,
    SignupPhone,
    SignupPassword,
    SignupPasswordConfirm,
    ForgotEmail,
    SupportName,
    SupportEmail,
    SupportPhone,
    SupportMessage,
    FriendIdentifier,
    GroupName,
    GroupDescription,
    GroupMembers,
    ExpenseDescription,
    ExpenseAmount,
    ExpenseParticipants,
}

impl Field {
    /// DOM id of the input; the error element is `{id}Error`.
    pub fn id(&self) -> &'static str {
        match self {
            Field::LoginIdentifier => "loginIdentifier",
            Field::LoginPassword => "loginPassword",
            Field::SignupName => "signupName",
            Field::SignupEmail => "signupEmail",
            Field::SignupPhone => "signupPhone",
            Field::SignupPassword => "signupPassword",
            Field::SignupPasswordConfirm => "signupPasswordConfirm",
            Field::ForgotEmail => "forgotEmail",
            Field::SupportName => "supportName",
            Field::SupportEmail => "supportEmail",
            Field::SupportPhone => "supportPhone",
            Field::SupportMessage => "supportMessage",
            Field::FriendIdentifier => "friendIdentifier",
            Field::GroupName => "groupName",
            Field::GroupDescription => "groupDescription",
            Field::GroupMembers => "groupMembers",
            Field::ExpenseDescription => "expenseDescription",
            Field::ExpenseAmount => "expenseAmount",
            Field::ExpenseParticipants => "expenseParticipants",
        }
    }
}

/// Current error message per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Record the outcome of checking one field.
    pub fn put(&mut self, field: Field, outcome: Option<&'static str>) {
        match outcome {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

}

/// A form whose text inputs are addressed by [`Field`].
pub trait Form {
    /// The text fields, in display order.
    fn fields(&self) -> &'static [Field];

    /// Current raw value of a text field. Non-text fields read as empty.
    fn value(&self, field: Field) -> &str;

    fn set(&mut self, field: Field, value: String);

    /// Check one field; `Some(message)` when it is invalid.
    fn check(&self, field: Field) -> Option<&'static str>;

    /// Check every field.
    fn validate(&self) -> FieldErrors {
        collect_errors(self)
    }
}

fn collect_errors<F: Form + ?Sized>(form: &F) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in form.fields() {
        errors.put(*field, form.check(*field));
    }
    errors
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

fn optional_email(value: &str) -> Option<&'static str> {
    let value = value.trim();
    (!value.is_empty() && !is_valid_email(value)).then_some(MSG_INVALID_EMAIL)
}

fn optional_phone(value: &str) -> Option<&'static str> {
    let value = value.trim();
    (!value.is_empty() && !is_valid_phone(value)).then_some(MSG_INVALID_PHONE)
}

fn strong_password(value: &str) -> Option<&'static str> {
    (!is_valid_password(value.trim())).then_some(MSG_WEAK_PASSWORD)
}

fn length_between(
    value: &str,
    min: usize,
    max: usize,
    missing: &'static str,
    out_of_range: &'static str,
) -> Option<&'static str> {
    let len = value.trim().chars().count();
    if len == 0 {
        Some(missing)
    } else if len < min || len > max {
        Some(out_of_range)
    } else {
        None
    }
}

// -------------------------------------------------------------------------
// Authentication
// -------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl Form for LoginForm {
    fn fields(&self) -> &'static [Field] {
        &[Field::LoginIdentifier, Field::LoginPassword]
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::LoginIdentifier => &self.identifier,
            Field::LoginPassword => &self.password,
            _ => "",
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::LoginIdentifier => self.identifier = value,
            Field::LoginPassword => self.password = value,
            _ => {}
        }
    }

    fn check(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::LoginIdentifier => required(&self.identifier, MSG_IDENTIFIER_REQUIRED),
            Field::LoginPassword => strong_password(&self.password),
            _ => None,
        }
    }
}

impl LoginForm {
    pub fn to_request(&self) -> api::LoginRequest {
        api::LoginRequest {
            identifier: self.identifier.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirm: String,
}

impl Form for SignupForm {
    fn fields(&self) -> &'static [Field] {
        &[
            Field::SignupName,
            Field::SignupEmail,
            Field::SignupPhone,
            Field::SignupPassword,
            Field::SignupPasswordConfirm,
        ]
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::SignupName => &self.name,
            Field::SignupEmail => &self.email,
            Field::SignupPhone => &self.phone,
            Field::SignupPassword => &self.password,
            Field::SignupPasswordConfirm => &self.password_confirm,
            _ => "",
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::SignupName => self.name = value,
            Field::SignupEmail => self.email = value,
            Field::SignupPhone => self.phone = value,
            Field::SignupPassword => self.password = value,
            Field::SignupPasswordConfirm => self.password_confirm = value,
            _ => {}
        }
    }

    fn check(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::SignupName => required(&self.name, MSG_NAME_REQUIRED),
            Field::SignupEmail => optional_email(&self.email),
            Field::SignupPhone => optional_phone(&self.phone),
            Field::SignupPassword => strong_password(&self.password),
            Field::SignupPasswordConfirm => {
                (self.password_confirm.trim() != self.password).then_some(MSG_PASSWORD_MISMATCH)
            }
            _ => None,
        }
    }
}

impl SignupForm {
    /// Signup needs at least one way to reach the user.
    pub fn missing_contact(&self) -> bool {
        self.email.trim().is_empty() && self.phone.trim().is_empty()
    }

    /// Submit-time checks: every field, plus the form-level contact message.
    /// The contact rule is reported even when other fields are invalid.
    pub fn validate_submit(&self) -> (FieldErrors, Option<&'static str>) {
        let contact = self.missing_contact().then_some(MSG_CONTACT_REQUIRED);
        (self.validate(), contact)
    }

    pub fn to_request(&self) -> api::SignupRequest {
        api::SignupRequest::from_form(
            &self.name,
            &self.email,
            &self.phone,
            &self.password,
            &self.password_confirm,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl Form for ForgotPasswordForm {
    fn fields(&self) -> &'static [Field] {
        &[Field::ForgotEmail]
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::ForgotEmail => &self.email,
            _ => "",
        }
    }

    fn set(&mut self, field: Field, value: String) {
        if field == Field::ForgotEmail {
            self.email = value;
        }
    }

    fn check(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::ForgotEmail => (!is_valid_email(self.email.trim())).then_some(MSG_INVALID_EMAIL),
            _ => None,
        }
    }
}

// -------------------------------------------------------------------------
// Support
// -------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupportForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Form for SupportForm {
    fn fields(&self) -> &'static [Field] {
        &[
            Field::SupportName,
            Field::SupportEmail,
            Field::SupportPhone,
            Field::SupportMessage,
        ]
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::SupportName => &self.name,
            Field::SupportEmail => &self.email,
            Field::SupportPhone => &self.phone,
            Field::SupportMessage => &self.message,
            _ => "",
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::SupportName => self.name = value,
            Field::SupportEmail => self.email = value,
            Field::SupportPhone => self.phone = value,
            Field::SupportMessage => self.message = value,
            _ => {}
        }
    }

    fn check(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::SupportName => length_between(
                &self.name,
                2,
                100,
                MSG_NAME_REQUIRED,
                "Name must be between 2 and 100 characters",
            ),
            Field::SupportEmail => {
                required(&self.email, "Email is required").or_else(|| optional_email(&self.email))
            }
            Field::SupportPhone => (self.phone.trim().chars().count() > 20)
                .then_some("Phone number cannot exceed 20 characters"),
            Field::SupportMessage => length_between(
                &self.message,
                10,
                2000,
                "Message is required",
                "Message must be between 10 and 2000 characters",
            ),
            _ => None,
        }
    }
}

impl SupportForm {
    pub fn to_request(&self) -> api::SupportRequest {
        let phone = self.phone.trim();
        api::SupportRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: self.message.trim().to_string(),
        }
    }
}

// -------------------------------------------------------------------------
// Friends, groups, expenses
// -------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddFriendForm {
    pub identifier: String,
}

impl Form for AddFriendForm {
    fn fields(&self) -> &'static [Field] {
        &[Field::FriendIdentifier]
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::FriendIdentifier => &self.identifier,
            _ => "",
        }
    }

    fn set(&mut self, field: Field, value: String) {
        if field == Field::FriendIdentifier {
            self.identifier = value;
        }
    }

    fn check(&self, field: Field) -> Option<&'static str> {
        if field != Field::FriendIdentifier {
            return None;
        }
        let value = self.identifier.trim();
        if value.is_empty() {
            Some(MSG_IDENTIFIER_REQUIRED)
        } else if value.contains('@') {
            optional_email(value)
        } else {
            optional_phone(value)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupForm {
    pub name: String,
    pub description: String,
    pub member_ids: Vec<String>,
}

impl Form for GroupForm {
    fn fields(&self) -> &'static [Field] {
        &[Field::GroupName, Field::GroupDescription]
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::GroupName => &self.name,
            Field::GroupDescription => &self.description,
            _ => "",
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::GroupName => self.name = value,
            Field::GroupDescription => self.description = value,
            _ => {}
        }
    }

    fn check(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::GroupName => length_between(
                &self.name,
                2,
                100,
                "Group name is required",
                "Group name must be between 2 and 100 characters",
            ),
            Field::GroupDescription => (self.description.trim().chars().count() > 500)
                .then_some("Description cannot exceed 500 characters"),
            Field::GroupMembers => self
                .member_ids
                .is_empty()
                .then_some("Choose at least one friend"),
            _ => None,
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = collect_errors(self);
        errors.put(Field::GroupMembers, self.check(Field::GroupMembers));
        errors
    }
}

impl GroupForm {
    pub fn toggle_member(&mut self, user_id: &str) {
        toggle(&mut self.member_ids, user_id);
    }

    pub fn to_request(&self) -> api::CreateGroupRequest {
        let description = self.description.trim();
        api::CreateGroupRequest {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            member_ids: self.member_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub category: ExpenseCategory,
    pub group_id: Option<String>,
    pub participant_ids: Vec<String>,
}

impl Form for ExpenseForm {
    fn fields(&self) -> &'static [Field] {
        &[Field::ExpenseDescription, Field::ExpenseAmount]
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::ExpenseDescription => &self.description,
            Field::ExpenseAmount => &self.amount,
            _ => "",
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::ExpenseDescription => self.description = value,
            Field::ExpenseAmount => self.amount = value,
            _ => {}
        }
    }

    fn check(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::ExpenseDescription => length_between(
                &self.description,
                2,
                200,
                "Description is required",
                "Description must be between 2 and 200 characters",
            ),
            Field::ExpenseAmount => match self.parsed_amount() {
                None => Some("Please enter a valid amount"),
                Some(a) if a < 0.01 => Some("Amount must be positive"),
                Some(_) => None,
            },
            Field::ExpenseParticipants => self
                .participant_ids
                .is_empty()
                .then_some("Choose at least one friend to split with"),
            _ => None,
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = collect_errors(self);
        errors.put(
            Field::ExpenseParticipants,
            self.check(Field::ExpenseParticipants),
        );
        errors
    }
}

impl ExpenseForm {
    /// The amount as a number, accepting an optional leading `$`.
    pub fn parsed_amount(&self) -> Option<f64> {
        let text = self.amount.trim();
        let text = text.strip_prefix('$').unwrap_or(text).trim();
        text.parse::<f64>().ok().filter(|a| a.is_finite())
    }

    pub fn toggle_participant(&mut self, user_id: &str) {
        toggle(&mut self.participant_ids, user_id);
    }

    /// Equal split between the payer and the chosen friends.
    pub fn to_request(&self, payer_id: &str) -> Option<api::CreateExpenseRequest> {
        let amount = self.parsed_amount()?;
        let mut request = api::CreateExpenseRequest::split_equally(
            self.description.trim(),
            (amount * 100.0).round() / 100.0,
            payer_id,
            &self.participant_ids,
        );
        request.category = Some(self.category);
        request.group_id = self.group_id.clone();
        Some(request)
    }
}

fn toggle(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|x| x == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}
