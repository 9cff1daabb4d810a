//! Go code generation using `net/http`.

use super::literal::json_string;
use super::Snippet;

/// Generates a Go program that sends the request.
///
/// The `strings` import is only emitted when a body is sent, so the program
/// compiles either way.
pub fn generate_go_code(snippet: &Snippet<'_>) -> String {
    let body_reader = match snippet.body {
        Some(body) => format!("strings.NewReader({})", json_string(body)),
        None => "nil".to_string(),
    };

    let mut code = String::new();

    code.push_str("package main\n\n");
    code.push_str("import (\n");
    code.push_str("\t\"fmt\"\n");
    code.push_str("\t\"io\"\n");
    code.push_str("\t\"net/http\"\n");
    if snippet.body.is_some() {
        code.push_str("\t\"strings\"\n");
    }
    code.push_str(")\n\n");

    code.push_str("func main() {\n");
    code.push_str("\tclient := &http.Client{}\n\n");
    code.push_str(&format!(
        "\treq, err := http.NewRequest({}, {}, {})\n",
        json_string(snippet.method),
        json_string(snippet.url),
        body_reader
    ));
    code.push_str("\tif err != nil {\n");
    code.push_str("\t\tfmt.Printf(\"Error creating request: %v\\n\", err)\n");
    code.push_str("\t\treturn\n");
    code.push_str("\t}\n\n");

    if !snippet.headers.is_empty() {
        for (key, value) in &snippet.headers {
            code.push_str(&format!(
                "\treq.Header.Set({}, {})\n",
                json_string(key),
                json_string(value)
            ));
        }
        code.push('\n');
    }

    code.push_str("\tresp, err := client.Do(req)\n");
    code.push_str("\tif err != nil {\n");
    code.push_str("\t\tfmt.Printf(\"Error making request: %v\\n\", err)\n");
    code.push_str("\t\treturn\n");
    code.push_str("\t}\n");
    code.push_str("\tdefer resp.Body.Close()\n\n");
    code.push_str("\tbody, err := io.ReadAll(resp.Body)\n");
    code.push_str("\tif err != nil {\n");
    code.push_str("\t\tfmt.Printf(\"Error reading response: %v\\n\", err)\n");
    code.push_str("\t\treturn\n");
    code.push_str("\t}\n\n");
    code.push_str("\tfmt.Printf(\"Status: %s\\n\", resp.Status)\n");
    code.push_str("\tfmt.Printf(\"Response: %s\\n\", string(body))\n");
    code.push('}');

    code
}
