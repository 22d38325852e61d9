//! Centralized style constants for consistent theming across the widget

// Background colors with dark mode support
pub const CONTAINER_BG: &str = "bg-gray-50 dark:bg-gray-900";
pub const CARD_BG: &str = "bg-white dark:bg-gray-800";

// Text colors with dark mode support
pub const PRIMARY_TEXT: &str = "text-gray-900 dark:text-gray-100";
pub const SECONDARY_TEXT: &str = "text-gray-700 dark:text-gray-300";
pub const TERTIARY_TEXT: &str = "text-gray-600 dark:text-gray-400";

// Border colors with dark mode support
pub const PRIMARY_BORDER: &str = "border-gray-200 dark:border-gray-700";

// Message bubble styles
pub const USER_BUBBLE_COLORS: &str =
    "bg-blue-100 dark:bg-blue-900 ml-10 md:ml-20 border border-blue-200 dark:border-blue-800";
pub const BIASED_BUBBLE_COLORS: &str =
    "bg-red-50 dark:bg-red-900 mr-10 md:mr-20 border border-red-200 dark:border-red-700";
pub const FAIR_BUBBLE_COLORS: &str =
    "bg-green-50 dark:bg-green-900 mr-10 md:mr-20 border border-green-200 dark:border-green-800";
pub const TYPING_BUBBLE_COLORS: &str =
    "bg-white dark:bg-gray-700 mr-10 md:mr-20 border border-gray-200 dark:border-gray-600 italic";

// Card styles
pub const BIASED_CARD_COLORS: &str = "bg-red-50 dark:bg-red-900 border-red-200 dark:border-red-700";
pub const FAIR_CARD_COLORS: &str =
    "bg-green-50 dark:bg-green-900 border-green-200 dark:border-green-800";
pub const CARD_GRID: &str = "grid grid-cols-1 md:grid-cols-2 gap-4";

// Bias note and tag styles
pub const NOTE_STYLE: &str = "mt-2 px-3 py-2 rounded text-sm bg-orange-100 dark:bg-orange-900 text-orange-800 dark:text-orange-200";
pub const TAG_STYLE: &str = "px-2 py-0.5 rounded-full text-xs bg-gray-100 dark:bg-gray-700 text-gray-600 dark:text-gray-400";

// Button styles
pub const PRIMARY_BUTTON: &str = "px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white rounded-md transition-colors disabled:bg-gray-300 dark:disabled:bg-gray-600 disabled:cursor-not-allowed";
pub const CHIP_BUTTON: &str = "px-3 py-1 rounded-full text-sm bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-700 dark:text-gray-300 transition-colors";

// Input styles
pub const INPUT_BASE: &str = "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500";
pub const INPUT_COLORS: &str =
    "border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200";

// Common layout patterns
pub const FLEX_COL: &str = "flex flex-col";
pub const FLEX_COL_GAP_2: &str = "flex flex-col gap-2";
pub const FLEX_COL_GAP_4: &str = "flex flex-col gap-4";
pub const FLEX_CENTER_GAP_2: &str = "flex items-center gap-2";

// Common spacing
pub const STANDARD_PADDING: &str = "p-4";
pub const HEADER_PADDING: &str = "px-4 py-3";

// Shadows and rounded corners
pub const LIGHT_SHADOW: &str = "shadow-sm";
pub const ROUNDED_STANDARD: &str = "rounded-lg";

// Utility function to combine multiple style constants
pub fn combine_styles(styles: &[&str]) -> String {
    styles.join(" ")
}
