//! Built-in reply catalogue for customer support.
//!
//! Order matters: matching is first-hit in definition order.

pub const GREETING_REPLY: &str =
    "Hello! Welcome to our customer support. How can I help you today?";
pub const HI_REPLY: &str = "Hi there! I'm here to assist you. What can I do for you?";
pub const HOURS_REPLY: &str = "Our business hours are Monday-Friday 9 AM to 6 PM EST.";
pub const CONTACT_REPLY: &str =
    "You can reach us at support@company.com or call (555) 123-4567.";
pub const PRICING_REPLY: &str = "Our basic plan starts at $29/month. Premium plan is $59/month. Enterprise pricing available on request.";
pub const REFUND_REPLY: &str = "We offer a 30-day money-back guarantee. Please contact support@company.com for refund requests.";
pub const SHIPPING_REPLY: &str =
    "We offer free shipping on orders over $50. Standard shipping takes 3-5 business days.";
pub const RETURN_REPLY: &str =
    "Returns are accepted within 30 days of purchase. Items must be in original condition.";
pub const SUPPORT_REPLY: &str = "Our support team is available 24/7 via chat, email, or phone.";
pub const ACCOUNT_REPLY: &str =
    "To manage your account, please log in to our website and visit the account settings page.";
pub const PASSWORD_REPLY: &str =
    "To reset your password, click 'Forgot Password' on the login page.";
pub const CANCEL_REPLY: &str =
    "To cancel your subscription, please contact our support team or visit account settings.";
pub const FEATURES_REPLY: &str = "Our platform includes real-time analytics, team collaboration, automated workflows, and 24/7 support.";
pub const DEMO_REPLY: &str =
    "You can schedule a free demo at demo@company.com or book online through our website.";
pub const TRIAL_REPLY: &str =
    "We offer a 14-day free trial with full access to all features. No credit card required!";
pub const FAREWELL_REPLY: &str = "Thank you for contacting us! Have a great day!";
pub const THANKS_REPLY: &str = "You're welcome! Is there anything else I can help you with?";

/// Direct keyword → reply pairs, scanned top to bottom
pub const KEYWORD_TABLE: &[(&str, &str)] = &[
    ("hello", GREETING_REPLY),
    ("hi", HI_REPLY),
    ("hours", HOURS_REPLY),
    ("contact", CONTACT_REPLY),
    ("pricing", PRICING_REPLY),
    ("refund", REFUND_REPLY),
    ("shipping", SHIPPING_REPLY),
    ("return", RETURN_REPLY),
    ("support", SUPPORT_REPLY),
    ("account", ACCOUNT_REPLY),
    ("password", PASSWORD_REPLY),
    ("cancel", CANCEL_REPLY),
    ("features", FEATURES_REPLY),
    ("demo", DEMO_REPLY),
    ("trial", TRIAL_REPLY),
    ("bye", FAREWELL_REPLY),
    ("thanks", THANKS_REPLY),
];

pub const HELP_MENU_REPLY: &str = "I'm here to help! You can ask me about our hours, pricing, shipping, returns, or any other questions.";
pub const ISSUE_REPLY: &str = "I'm sorry to hear you're experiencing an issue. Can you please provide more details about the problem you're facing?";
pub const SALES_REPLY: &str = "Great! You can place an order through our website or contact our sales team at sales@company.com for assistance.";

/// Category rules checked only when no keyword matched
pub const CATEGORY_RULES: &[(&str, &[&str], &str)] = &[
    ("help", &["help", "assist", "support"], HELP_MENU_REPLY),
    ("issue", &["problem", "issue", "error", "bug"], ISSUE_REPLY),
    ("sales", &["buy", "purchase", "order"], SALES_REPLY),
];

pub const DEFAULT_REPLY: &str = "I understand your question. For detailed assistance, please contact our support team at support@company.com or call (555) 123-4567.";
