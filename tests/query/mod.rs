mod tests_fields;
mod tests_tree;
