//! Static file contents written into generated projects.
//!
//! Plain text files live here as constants or small render functions. JSON
//! files are built with `serde_json::json!` so they go through the same
//! writer (and formatting) as every patched file.

use serde_json::{Value, json};

use crate::domain::value_objects::{StyleLanguage, TestRunner};

pub const JEST_CONFIG_TS: &str = r#"import type { Config } from 'jest';

const config: Config = {
  preset: 'jest-preset-angular',
  setupFilesAfterEnv: ['<rootDir>/src/test-setup.ts'],
  testMatch: ['**/*.spec.ts'],
  collectCoverageFrom: ['src/**/*.ts', '!src/**/*.spec.ts', '!src/**/*.d.ts'],
};

export default config;
"#;

pub const JEST_TEST_SETUP_TS: &str = "import 'jest-preset-angular/setup-jest';\n";

pub const ESLINT_CONFIG_JS: &str = r#"// @ts-check
const eslint = require('@eslint/js');
const tseslint = require('typescript-eslint');
const angular = require('angular-eslint');

module.exports = tseslint.config(
  {
    files: ['**/*.ts'],
    extends: [
      eslint.configs.recommended,
      ...tseslint.configs.recommended,
      ...angular.configs.tsRecommended,
    ],
    processor: angular.processInlineTemplates,
    rules: {},
  },
  {
    files: ['**/*.html'],
    extends: [
      ...angular.configs.templateRecommended,
      ...angular.configs.templateAccessibility,
    ],
    rules: {},
  },
);
"#;

pub const HUSKY_PRE_COMMIT: &str = "npx lint-staged\n";

pub const TAILWIND_IMPORT: &str = "@import \"tailwindcss\";";

pub const TAILWIND_POSTCSS_PLUGIN: &str = "@tailwindcss/postcss";

/// `.vscode/settings.json`: format on save with Prettier, ESLint fixes on
/// save, workspace TypeScript.
pub fn vscode_settings() -> Value {
    json!({
        "editor.formatOnSave": true,
        "editor.defaultFormatter": "esbenp.prettier-vscode",
        "editor.codeActionsOnSave": {
            "source.fixAll.eslint": "explicit"
        },
        "typescript.tsdk": "node_modules/typescript/lib",
        "typescript.enablePromptUseWorkspaceTsdk": true,
        "[typescript]": { "editor.defaultFormatter": "esbenp.prettier-vscode" },
        "[html]": { "editor.defaultFormatter": "esbenp.prettier-vscode" },
        "[json]": { "editor.defaultFormatter": "esbenp.prettier-vscode" }
    })
}

/// `.vscode/extensions.json`. The Tailwind extension is only recommended
/// when the project actually uses Tailwind.
pub fn vscode_extensions(styles: StyleLanguage) -> Value {
    let mut recommendations = vec![
        "angular.ng-template",
        "esbenp.prettier-vscode",
        "dbaeumer.vscode-eslint",
    ];
    if styles == StyleLanguage::Tailwind {
        recommendations.push("bradlc.vscode-tailwindcss");
    }
    json!({ "recommendations": recommendations })
}

/// `.cursorrules`: code generation guidance for AI-assisted editors.
pub fn cursor_rules(runner: TestRunner, testing_library: bool) -> String {
    let testing = match (runner.is_enabled(), testing_library) {
        (true, true) => format!("- Use {} and Angular Testing Library.", runner.display_name()),
        (true, false) => format!("- Use {} with Angular's `TestBed`.", runner.display_name()),
        (false, _) => "- No test runner is configured; add one before writing specs.".to_string(),
    };

    format!(
        r#"# Angular + Signals | Generation rules and best practices

## Angular Component Generation

- Always generate **standalone** components.
- Default to `ChangeDetectionStrategy.OnPush`.
- Use the **signal-based** `input()` and `output()` functions instead of decorators.
- Always use `withComponentInputBinding`.
- **Do not** use **NgModules** under any circumstance.
- Use the `inject` function for dependencies.
- Templates use the built-in control flow (`@if`, `@for`, `@switch`).
- Use `NgOptimizedImage` for all static images.
- Selector prefix should be `app-`.

## Angular Service Generation

- Services must be tree-shakable (`providedIn: 'root'`).
- Use the `inject` function for internal dependencies.

## State Management

- Prefer Angular **Signals** for local reactive state in components.
- Use `computed()` for derived state and `effect()` only for side effects.
- For complex or shared global state, use **NgRx SignalStore** or a custom Signal-based store.
- **Avoid** `BehaviorSubject`, `ReplaySubject` or manual observables in components.

## Testing

- Every component must have a `.spec.ts` file.
{testing}
- Prefer reusable mock factories over ad-hoc stubs.

## Code Style & Best Practices

- Avoid `any`; use `unknown` or specific types.
- Use `readonly` for properties that shouldn't change.
- Declare all public functions with explicit return types.
- Use `as const` for constant arrays and objects.
- Avoid hardcoded strings in templates. Extract them to constants or i18n files.
"#
    )
}
