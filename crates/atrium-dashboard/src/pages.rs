//! Page templates for dashboard views.

use crate::templates::{self, badge, stats_card};
use atrium_core::User;
use chrono::{DateTime, Local};

// =============================================================================
// Login Page
// =============================================================================

/// The login form. `error` is the most recent failure message; it clears on
/// the next submission attempt. `redirect` is carried through the form so a
/// successful login lands on the page that was originally requested.
pub fn login_page(error: Option<&str>, redirect: Option<&str>) -> String {
    let error_html = error.map(templates::error_banner).unwrap_or_default();

    let redirect_input = redirect
        .map(|r| {
            format!(
                r#"<input type="hidden" name="redirect" value="{}">"#,
                templates::html_escape(r)
            )
        })
        .unwrap_or_default();

    let content = format!(
        r##"<div class="bg-white rounded-xl shadow-sm p-8">
            <div class="text-center mb-8">
                <i class="fas fa-layer-group text-primary-600 text-4xl"></i>
                <h2 class="mt-6 text-3xl font-extrabold text-gray-900">Sign in to your account</h2>
                <p class="mt-2 text-sm text-gray-600">
                    or <a href="mailto:support@example.com" class="font-medium text-primary-600 hover:text-primary-500">ask about creating one</a>
                </p>
            </div>

            <form method="POST" action="/login" class="space-y-6" x-data="{{ submitting: false }}" @submit="submitting = true">
                {redirect_input}

                <div class="space-y-4">
                    {email_input}

                    {password_input}

                    {error_html}

                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-2">
                            <input id="remember-me" name="remember-me" type="checkbox"
                                   class="h-4 w-4 rounded border-gray-300 text-primary-600 focus:ring-primary-500">
                            <label for="remember-me" class="text-sm font-normal text-gray-700">Keep me signed in</label>
                        </div>
                        <div class="text-sm">
                            <a href="/forgot-password" class="font-medium text-primary-600 hover:text-primary-500">Forgot your password?</a>
                        </div>
                    </div>
                </div>

                {submit}
            </form>
        </div>"##,
        redirect_input = redirect_input,
        email_input = templates::input("email", "Email address", "email", "Email address"),
        password_input = password_input(),
        error_html = error_html,
        submit = templates::submit_button("Sign in"),
    );

    templates::auth_shell("Login", &content)
}

/// Password field with the visibility toggle.
fn password_input() -> String {
    r##"<div class="space-y-2" x-data="{ show: false }">
        <label for="password" class="block text-sm font-medium text-gray-700">Password</label>
        <div class="relative">
            <input :type="show ? 'text' : 'password'" name="password" id="password" required placeholder="Password"
                   class="block w-full px-3 py-2 pr-10 border border-gray-300 rounded-md placeholder-gray-400 focus:outline-none focus:ring-primary-500 focus:border-primary-500 sm:text-sm"
                   :disabled="submitting">
            <button type="button" @click="show = !show"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600">
                <i class="fas" :class="show ? 'fa-eye-slash' : 'fa-eye'"></i>
            </button>
        </div>
    </div>"##
        .to_string()
}

// =============================================================================
// Forgot Password Pages
// =============================================================================

/// The reset-request form.
pub fn forgot_password_page(error: Option<&str>) -> String {
    let error_html = error.map(templates::error_banner).unwrap_or_default();

    let content = format!(
        r##"<div class="bg-white rounded-xl shadow-sm p-8">
            <div class="text-center">
                <i class="fas fa-layer-group text-primary-600 text-4xl"></i>
                <h2 class="mt-6 text-3xl font-extrabold text-gray-900">Reset your password</h2>
                <p class="mt-2 text-sm text-gray-600">
                    Enter the email address you registered with.<br>
                    We will send you a link to reset your password.
                </p>
            </div>

            <form method="POST" action="/forgot-password" class="mt-8 space-y-6" x-data="{{ submitting: false }}" @submit="submitting = true">
                {email_input}

                {error_html}

                {submit}

                <div class="text-center text-sm">
                    <a href="/login" class="font-medium text-primary-600 hover:text-primary-500">Back to login</a>
                </div>
            </form>
        </div>"##,
        email_input = templates::input("email", "Email address", "email", "Email address"),
        error_html = error_html,
        submit = templates::submit_button("Send reset link"),
    );

    templates::auth_shell("Reset Password", &content)
}

/// Confirmation shown after a reset request was accepted.
pub fn forgot_password_sent_page(email: &str) -> String {
    let content = format!(
        r##"<div class="bg-white rounded-xl shadow-sm p-8 text-center">
            <i class="fas fa-envelope-circle-check text-primary-600 text-4xl"></i>
            <h2 class="mt-6 text-3xl font-extrabold text-gray-900">Check your email</h2>
            <p class="mt-2 text-sm text-gray-600">
                A password reset link was sent to {email}.<br>
                Follow the instructions in the mail to choose a new password.
            </p>
            <div class="mt-6">
                <a href="/login" class="font-medium text-primary-600 hover:text-primary-500">Back to login</a>
            </div>
        </div>"##,
        email = templates::html_escape(email),
    );

    templates::auth_shell("Reset Password", &content)
}

// =============================================================================
// Dashboard Page
// =============================================================================

/// The dashboard: greeting, mock statistics, a chart placeholder, the
/// activity feed and task table fixtures, and the error-boundary trigger.
pub fn dashboard_page(user: &User, now: DateTime<Local>) -> String {
    let date = now.format("%A, %B %-d, %Y").to_string();

    let stats = format!(
        r##"<div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            {visits}
            {new_users}
            {sessions}
            {avg_time}
        </div>"##,
        visits = stats_card("Total visits", "3,721", "eye", Some(("12%", true))),
        new_users = stats_card("New users", "245", "user-plus", Some(("8%", true))),
        sessions = stats_card("Active sessions", "128", "bolt", Some(("3%", false))),
        avg_time = stats_card("Avg. session time", "4m 32s", "clock", Some(("7%", true))),
    );

    let content = format!(
        r##"<div class="flex justify-between items-center mb-8">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">Hello, {name}</h1>
                <p class="text-gray-600 mt-1">{date}</p>
            </div>
            <button type="button" class="px-4 py-2 bg-primary-600 text-white rounded-md text-sm font-medium hover:bg-primary-700">Create report</button>
        </div>

        {stats}

        <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
            {chart}

            {activity}
        </div>

        {tasks}

        {error_test}"##,
        name = templates::html_escape(&user.name),
        date = date,
        stats = stats,
        chart = chart_section(),
        activity = activity_section(),
        tasks = task_section(),
        error_test = error_test_section(),
    );

    templates::layout("Dashboard", &user.name, &content)
}

fn chart_section() -> String {
    r##"<div class="lg:col-span-2 bg-white rounded-xl shadow-sm p-6">
        <div class="flex justify-between items-center mb-6">
            <h2 class="text-lg font-medium text-gray-900">Monthly usage</h2>
            <div class="flex space-x-2">
                <button type="button" class="px-3 py-1 text-sm text-primary-600 bg-primary-50 rounded-md font-medium">Weekly</button>
                <button type="button" class="px-3 py-1 text-sm text-gray-600 hover:bg-gray-50 rounded-md font-medium">Monthly</button>
                <button type="button" class="px-3 py-1 text-sm text-gray-600 hover:bg-gray-50 rounded-md font-medium">Yearly</button>
            </div>
        </div>
        <div class="w-full h-80 bg-gray-50 rounded-lg flex items-center justify-center">
            <p class="text-gray-500">Chart data will appear here</p>
        </div>
    </div>"##
        .to_string()
}

fn activity_section() -> String {
    let items: String = [
        (
            "Signed in",
            "30 minutes ago",
            "Signed in from a new IP address",
            "right-to-bracket",
        ),
        (
            "Profile updated",
            "2 hours ago",
            "Profile details were updated",
            "user",
        ),
        (
            "New report",
            "yesterday",
            "Created the monthly report",
            "chart-column",
        ),
        (
            "Settings changed",
            "3 days ago",
            "Notification settings were updated",
            "gear",
        ),
    ]
    .iter()
    .map(|(title, time, description, icon)| activity_item(title, time, description, icon))
    .collect();

    format!(
        r##"<div class="bg-white rounded-xl shadow-sm p-6">
            <h2 class="text-lg font-medium text-gray-900 mb-6">Recent activity</h2>
            <div class="space-y-0">
                {items}
            </div>
            <div class="mt-6 text-center">
                <button type="button" class="text-sm font-medium text-primary-600 hover:text-primary-500">Show all activity</button>
            </div>
        </div>"##
    )
}

fn activity_item(title: &str, time: &str, description: &str, icon: &str) -> String {
    format!(
        r##"<div class="flex gap-4 py-4 border-b border-gray-100 last:border-0">
            <div class="p-2 rounded-full bg-primary-50 text-primary-600 h-fit">
                <i class="fas fa-{icon} w-5 text-center"></i>
            </div>
            <div class="flex-1">
                <div class="flex items-center justify-between">
                    <h4 class="font-medium text-gray-900">{title}</h4>
                    <span class="text-xs text-gray-500">{time}</span>
                </div>
                <p class="text-sm text-gray-600 mt-1">{description}</p>
            </div>
        </div>"##
    )
}

fn task_section() -> String {
    let rows = vec![
        vec![
            "Draft the quarterly report".to_string(),
            "2025-07-15".to_string(),
            badge("High", "red"),
            badge("In progress", "yellow"),
        ],
        vec![
            "Analyze new user cohort".to_string(),
            "2025-07-05".to_string(),
            badge("Medium", "yellow"),
            badge("Done", "green"),
        ],
        vec![
            "Security audit".to_string(),
            "2025-07-30".to_string(),
            badge("Low", "blue"),
            badge("Not started", "gray"),
        ],
    ];

    format!(
        r##"<div class="mt-8 bg-white rounded-xl shadow-sm p-6">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-lg font-medium text-gray-900">Recent tasks</h2>
                <button type="button" class="px-4 py-2 border border-primary-600 text-primary-600 rounded-md text-sm font-medium hover:bg-primary-50">New task</button>
            </div>
            {table}
        </div>"##,
        table = templates::table(&["Task", "Due", "Priority", "Status"], &rows),
    )
}

fn error_test_section() -> String {
    r##"<div class="mt-8 bg-white rounded-xl shadow-sm p-6 text-center">
        <h2 class="text-xl font-semibold mb-4">Test error handling</h2>
        <a href="/dashboard/error-test"
           class="inline-block px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 transition-colors">
            Trigger runtime error
        </a>
        <p class="mt-2 text-sm text-gray-500">Follow this link to check the fallback page</p>
    </div>"##
        .to_string()
}

// =============================================================================
// Error Pages
// =============================================================================

/// Page-level fallback for a view that failed while rendering. The retry
/// action reloads the failed route.
pub fn error_page(message: &str) -> String {
    let content = format!(
        r##"<div class="flex flex-col items-center justify-center min-h-screen p-4 text-center">
        <h1 class="text-3xl font-bold mb-4">Something went wrong!</h1>
        <div class="bg-red-50 border border-red-200 rounded-md p-4 mb-4 max-w-md">
            <p class="text-red-700 mb-2">Error: {message}</p>
        </div>
        <button type="button" onclick="window.location.reload()"
                class="px-4 py-2 bg-primary-600 text-white rounded-md hover:bg-primary-700 transition-colors">
            Try again
        </button>
    </div>"##,
        message = templates::html_escape(message),
    );

    templates::document("Error", &content)
}

/// Root-level fallback served when a request handler panics. Deliberately
/// self-contained: no CDN assets, nothing shared with the normal layout.
pub fn root_error_page(detail: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Error - Atrium</title>
</head>
<body style="font-family: sans-serif; display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; margin: 0; text-align: center;">
    <h1>Something went wrong!</h1>
    <div style="background: #fef2f2; border: 1px solid #fecaca; border-radius: 6px; padding: 16px; margin: 16px; max-width: 28rem;">
        <p style="color: #b91c1c;">Global error: {detail}</p>
    </div>
    <button type="button" onclick="window.location.reload()"
            style="padding: 8px 16px; background: #4f46e5; color: #fff; border: 0; border-radius: 6px; cursor: pointer;">
        Try again
    </button>
</body>
</html>"##,
        detail = templates::html_escape(detail),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_core::UserRole;
    use uuid::Uuid;

    fn sample_user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: format!("{name}@example.com"),
            name: name.to_string(),
            role: UserRole::Administrator,
        }
    }

    #[test]
    fn login_page_shows_the_error_when_present() {
        let page = login_page(Some("please enter a valid email address"), None);
        assert!(page.contains("please enter a valid email address"));
        assert!(page.contains(r#"action="/login""#));

        let clean = login_page(None, None);
        assert!(!clean.contains("please enter a valid email address"));
    }

    #[test]
    fn login_page_carries_the_redirect_target() {
        let page = login_page(None, Some("/dashboard"));
        assert!(page.contains(r#"name="redirect" value="/dashboard""#));
    }

    #[test]
    fn dashboard_page_greets_the_user() {
        let user = sample_user("alice");
        let page = dashboard_page(&user, Local::now());
        assert!(page.contains("Hello, alice"));
        assert!(page.contains("3,721"));
        assert!(page.contains("/dashboard/error-test"));
    }

    #[test]
    fn dashboard_page_escapes_the_user_name() {
        let user = User {
            name: "<script>".to_string(),
            ..sample_user("x")
        };
        let page = dashboard_page(&user, Local::now());
        assert!(!page.contains("Hello, <script>"));
        assert!(page.contains("Hello, &lt;script&gt;"));
    }

    #[test]
    fn reset_confirmation_names_the_address() {
        let page = forgot_password_sent_page("alice@example.com");
        assert!(page.contains("alice@example.com"));
    }

    #[test]
    fn error_pages_offer_a_retry() {
        let page = error_page("boom");
        assert!(page.contains("Something went wrong!"));
        assert!(page.contains("Try again"));

        let root = root_error_page("boom");
        assert!(root.contains("Global error: boom"));
        assert!(root.contains("Try again"));
    }
}
