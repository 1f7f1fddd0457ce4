use crate::types::{IngredientLine, InstructionStep, RecipeDraft};

/// Password validation
pub struct PasswordPolicy;

impl PasswordPolicy {
    pub const MIN_LENGTH: usize = 8;

    pub fn validate(password: &str) -> Result<(), String> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(format!(
                "Password must be at least {} characters",
                Self::MIN_LENGTH
            ));
        }

        let has_uppercase = password.chars().any(|c| c.is_uppercase());
        let has_lowercase = password.chars().any(|c| c.is_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(|c| !c.is_alphanumeric());

        let requirements_met = [has_uppercase, has_lowercase, has_digit, has_special]
            .into_iter()
            .filter(|met| *met)
            .count();

        if requirements_met < 3 {
            return Err(
                "Password must contain at least 3 of: uppercase, lowercase, digit, special character"
                    .to_string(),
            );
        }

        Ok(())
    }
}

/// Email validation
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain must have at least one dot
    domain.contains('.')
}

pub fn validate_username(username: &str) -> Result<(), String> {
    let len = username.chars().count();
    if !(3..=20).contains(&len) {
        return Err("Username must be 3 to 20 characters".to_string());
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username may only contain letters, digits, '_' and '-'".to_string());
    }

    Ok(())
}

/// Checks a password change before it is sent; the backend verifies the
/// current password.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<(), String> {
    if current.is_empty() {
        return Err("Enter your current password".to_string());
    }
    if new != confirm {
        return Err("New passwords do not match".to_string());
    }
    if new == current {
        return Err("New password must differ from the current one".to_string());
    }
    PasswordPolicy::validate(new)
}

/// Signup form check, shared by the page and the server function.
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    validate_username(username.trim())?;
    if !validate_email(email) {
        return Err("Invalid email address".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    PasswordPolicy::validate(password)
}

impl RecipeDraft {
    pub const MAX_NAME_LENGTH: usize = 100;

    /// Drops blank ingredient and instruction rows and trims text fields.
    pub fn normalized(mut self) -> Self {
        self.recipe_name = self.recipe_name.trim().to_string();
        self.cuisine = self.cuisine.trim().to_string();
        self.food_type = self.food_type.trim().to_string();
        self.cooking_style = self.cooking_style.trim().to_string();
        self.image_path = self
            .image_path
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        self.ingredients = self
            .ingredients
            .into_iter()
            .map(|line| IngredientLine {
                ingredient: line.ingredient.trim().to_string(),
                quantity: line.quantity.trim().to_string(),
            })
            .filter(|line| !line.ingredient.is_empty())
            .collect();

        self.instructions = self
            .instructions
            .into_iter()
            .map(|step| InstructionStep {
                instruction_image: step
                    .instruction_image
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty()),
                instruction: step.instruction.trim().to_string(),
            })
            .filter(|step| !step.instruction.is_empty())
            .collect();

        self
    }

    /// Validates a normalized draft.
    pub fn validate(&self) -> Result<(), String> {
        if self.recipe_name.is_empty() {
            return Err("Recipe name is required".to_string());
        }
        if self.recipe_name.chars().count() > Self::MAX_NAME_LENGTH {
            return Err(format!(
                "Recipe name must be at most {} characters",
                Self::MAX_NAME_LENGTH
            ));
        }
        if !(1..=99).contains(&self.serving) {
            return Err("Serving must be between 1 and 99".to_string());
        }
        if self.ingredients.is_empty() {
            return Err("Add at least one ingredient".to_string());
        }
        if self.instructions.is_empty() {
            return Err("Add at least one cooking step".to_string());
        }
        Ok(())
    }
}
