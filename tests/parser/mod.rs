mod tests_classes;
mod tests_equations;
mod tests_errors;
mod tests_expressions;
mod tests_statements;
