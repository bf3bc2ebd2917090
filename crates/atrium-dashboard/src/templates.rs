//! HTML templates for the dashboard.
//!
//! Uses a simple template approach with Tailwind CSS and Alpine.js.

fn head(title: &str) -> String {
    format!(
        r##"<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Atrium</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {{
            theme: {{
                extend: {{
                    colors: {{
                        primary: {{
                            50: '#eef2ff',
                            100: '#e0e7ff',
                            200: '#c7d2fe',
                            300: '#a5b4fc',
                            400: '#818cf8',
                            500: '#6366f1',
                            600: '#4f46e5',
                            700: '#4338ca',
                            800: '#3730a3',
                            900: '#312e81',
                        }}
                    }}
                }}
            }}
        }}
    </script>
    <script defer src="https://unpkg.com/alpinejs@3.x.x/dist/cdn.min.js"></script>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <style>
        [x-cloak] {{ display: none !important; }}
    </style>
</head>"##
    )
}

/// Bare document shell.
pub fn document(title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
{head}
<body class="bg-gray-50 min-h-screen">
    {content}
</body>
</html>"##,
        head = head(title),
    )
}

/// Centered single-card shell used by the login and password-reset views.
pub fn auth_shell(title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
{head}
<body class="bg-gray-50 min-h-screen flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
    <div class="max-w-md w-full">
        {content}
    </div>
</body>
</html>"##,
        head = head(title),
    )
}

/// Full dashboard chrome: top navigation, main column, footer.
pub fn layout(title: &str, user_name: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
{head}
<body class="bg-gray-50 min-h-screen">
    {nav}

    <div class="py-10">
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            {content}
        </main>
    </div>

    {footer}
</body>
</html>"##,
        head = head(title),
        nav = nav_template(user_name),
        footer = FOOTER,
    )
}

fn nav_template(user_name: &str) -> String {
    format!(
        r##"<nav class="bg-white shadow-sm sticky top-0 z-10">
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="flex justify-between h-16">
                <div class="flex">
                    <a href="/dashboard" class="flex-shrink-0 flex items-center gap-2">
                        <i class="fas fa-layer-group text-primary-600 text-xl"></i>
                        <span class="font-semibold text-gray-900">Atrium</span>
                    </a>
                    <div class="hidden sm:ml-6 sm:flex sm:space-x-8">
                        <a href="/dashboard" class="border-primary-500 text-gray-900 inline-flex items-center px-1 pt-1 border-b-2 text-sm font-medium">Dashboard</a>
                        <a href="#" class="border-transparent text-gray-500 hover:border-gray-300 hover:text-gray-700 inline-flex items-center px-1 pt-1 border-b-2 text-sm font-medium">Account</a>
                        <a href="#" class="border-transparent text-gray-500 hover:border-gray-300 hover:text-gray-700 inline-flex items-center px-1 pt-1 border-b-2 text-sm font-medium">Settings</a>
                    </div>
                </div>
                <div class="flex items-center space-x-3">
                    <span class="text-sm text-gray-700">{user_name}</span>
                    <form method="POST" action="/logout">
                        <button type="submit" class="px-3 py-1 text-sm text-gray-700 hover:bg-gray-100 rounded-md">Sign out</button>
                    </form>
                </div>
            </div>
        </div>
    </nav>"##,
        user_name = html_escape(user_name),
    )
}

const FOOTER: &str = r##"<footer class="bg-white border-t border-gray-200 py-6">
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="flex justify-between items-center">
                <div class="text-sm text-gray-500">&copy; 2025 Atrium. All rights reserved.</div>
                <div class="flex space-x-6">
                    <a href="#" class="text-sm text-gray-500 hover:text-gray-900">Privacy Policy</a>
                    <a href="#" class="text-sm text-gray-500 hover:text-gray-900">Terms</a>
                    <a href="#" class="text-sm text-gray-500 hover:text-gray-900">Help</a>
                </div>
            </div>
        </div>
    </footer>"##;

/// Card component.
pub fn card(title: &str, content: &str) -> String {
    format!(
        r##"<div class="bg-white rounded-xl shadow-sm p-6">
            <h2 class="text-lg font-medium text-gray-900 mb-6">{title}</h2>
            {content}
        </div>"##
    )
}

/// Stats card component with an optional month-over-month change.
pub fn stats_card(title: &str, value: &str, icon: &str, change: Option<(&str, bool)>) -> String {
    let change_html = change.map_or(String::new(), |(amount, positive)| {
        let (arrow, color) = if positive {
            ("&uarr;", "text-green-500")
        } else {
            ("&darr;", "text-red-500")
        };
        format!(
            r##"<div class="flex items-center mt-2">
                    <span class="text-xs font-medium {color}">{arrow} {amount}</span>
                    <span class="text-xs text-gray-500 ml-1">vs last month</span>
                </div>"##
        )
    });

    format!(
        r##"<div class="bg-white rounded-xl shadow-sm p-6">
            <div class="flex justify-between items-start">
                <div>
                    <h3 class="text-gray-500 text-sm font-medium">{title}</h3>
                    <p class="text-2xl font-bold mt-2">{value}</p>
                    {change_html}
                </div>
                <div class="p-3 rounded-full bg-primary-50 text-primary-600">
                    <i class="fas fa-{icon} text-xl"></i>
                </div>
            </div>
        </div>"##
    )
}

/// Input field component. Expects an Alpine `submitting` flag in scope.
pub fn input(name: &str, label: &str, input_type: &str, placeholder: &str) -> String {
    format!(
        r##"<div class="space-y-2">
            <label for="{name}" class="block text-sm font-medium text-gray-700">{label}</label>
            <input type="{input_type}" name="{name}" id="{name}" required placeholder="{placeholder}"
                   class="block w-full px-3 py-2 border border-gray-300 rounded-md placeholder-gray-400 focus:outline-none focus:ring-primary-500 focus:border-primary-500 sm:text-sm"
                   :disabled="submitting">
        </div>"##
    )
}

/// Submit button with the submitting spinner.
pub fn submit_button(label: &str) -> String {
    format!(
        r##"<button type="submit" :disabled="submitting"
                class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-primary-600 hover:bg-primary-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-primary-500 disabled:opacity-70">
            <span x-show="submitting" class="flex items-center" x-cloak>
                <span class="animate-spin -ml-1 mr-2 h-4 w-4 border-2 border-white border-t-transparent rounded-full"></span>
                Processing...
            </span>
            <span x-show="!submitting">{label}</span>
        </button>"##
    )
}

/// Inline error banner shown above the submit button.
pub fn error_banner(message: &str) -> String {
    format!(
        r##"<div class="text-red-600 text-sm py-2 px-4 rounded-md bg-red-50 border border-red-200">{}</div>"##,
        html_escape(message)
    )
}

/// Badge component.
pub fn badge(text: &str, color: &str) -> String {
    format!(
        r##"<span class="px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-{color}-100 text-{color}-800">{text}</span>"##
    )
}

/// Table component.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let headers_html: String = headers
        .iter()
        .map(|h| format!(r#"<th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{h}</th>"#))
        .collect();

    let rows_html: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!(r#"<td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{cell}</td>"#))
                .collect();
            format!(r#"<tr class="hover:bg-gray-50">{cells}</tr>"#)
        })
        .collect();

    format!(
        r##"<div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>{headers_html}</tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {rows_html}
                </tbody>
            </table>
        </div>"##
    )
}

/// Simple HTML escape function
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
