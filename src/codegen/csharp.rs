//! C# code generation using `System.Net.Http.HttpClient`.

use super::literal::json_string;
use super::Snippet;

/// Generates a C# console program that sends the request.
pub fn generate_csharp_code(snippet: &Snippet<'_>) -> String {
    let url = json_string(snippet.url);
    let mut code = String::new();

    code.push_str("using System;\n");
    code.push_str("using System.Net.Http;\n");
    code.push_str("using System.Text;\n");
    code.push_str("using System.Threading.Tasks;\n\n");
    code.push_str("class Program\n{\n");
    code.push_str("    static async Task Main(string[] args)\n    {\n");
    code.push_str("        using var client = new HttpClient();\n\n");
    code.push_str("        try\n        {\n");

    for (key, value) in &snippet.headers {
        code.push_str(&format!(
            "            client.DefaultRequestHeaders.Add({}, {});\n",
            json_string(key),
            json_string(value)
        ));
    }
    if !snippet.headers.is_empty() {
        code.push('\n');
    }

    match (snippet.body, body_helper(snippet.method), simple_helper(snippet.method)) {
        (Some(body), Some(helper), _) => {
            code.push_str(&format!(
                "            var content = new StringContent({}, Encoding.UTF8, \"application/json\");\n",
                json_string(body)
            ));
            code.push_str(&format!(
                "            var response = await client.{}({}, content);\n",
                helper, url
            ));
        }
        (None, _, Some(helper)) => {
            code.push_str(&format!(
                "            var response = await client.{}({});\n",
                helper, url
            ));
        }
        _ => {
            code.push_str(&format!(
                "            var request = new HttpRequestMessage(new HttpMethod({}), {});\n",
                json_string(snippet.method),
                url
            ));
            code.push_str("            var response = await client.SendAsync(request);\n");
        }
    }

    code.push_str("\n            response.EnsureSuccessStatusCode();\n");
    code.push_str("            var responseBody = await response.Content.ReadAsStringAsync();\n\n");
    code.push_str("            Console.WriteLine($\"Status: {response.StatusCode}\");\n");
    code.push_str("            Console.WriteLine($\"Response: {responseBody}\");\n");
    code.push_str("        }\n");
    code.push_str("        catch (HttpRequestException e)\n        {\n");
    code.push_str("            Console.WriteLine($\"Error: {e.Message}\");\n");
    code.push_str("        }\n");
    code.push_str("    }\n");
    code.push('}');

    code
}

/// `HttpClient` helper that takes a content argument.
fn body_helper(method: &str) -> Option<&'static str> {
    match method {
        "POST" => Some("PostAsync"),
        "PUT" => Some("PutAsync"),
        "PATCH" => Some("PatchAsync"),
        _ => None,
    }
}

/// `HttpClient` helper that takes only the URL.
fn simple_helper(method: &str) -> Option<&'static str> {
    match method {
        "GET" => Some("GetAsync"),
        "DELETE" => Some("DeleteAsync"),
        _ => None,
    }
}
