// FICHIER : core/src/utils/macros.rs

/// Affiche une info à l'utilisateur et logue l'événement
#[macro_export]
macro_rules! user_info {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        println!("{}", msg);
        tracing::info!(event = "user_notification", message = %msg);
    }};
}

/// Affiche un succès à l'utilisateur
#[macro_export]
macro_rules! user_success {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        println!("✅ {}", msg);
        tracing::info!(event = "user_success", message = %msg);
    }};
}

/// Affiche une erreur à l'utilisateur ET logue la structure technique
#[macro_export]
macro_rules! user_error {
    (error = $err:expr, component = $comp:expr, action = $action:expr) => {{
        eprintln!("❌ [{}] {}", $comp, $err);
        tracing::error!(
            service = "lakeswarm", componentName = $comp, action = $action,
            error = %$err, event = "user_error"
        );
    }};
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        eprintln!("❌ {}", msg);
        tracing::error!(event = "user_error", message = %msg);
    }};
}
